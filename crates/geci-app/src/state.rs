use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use geci_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Source lines of the annotation currently on screen, for `:s N`
    pub lines: RwLock<Vec<String>>,
    /// Bumped on every new text input; stale async results carry the
    /// generation they were computed for and are dropped on mismatch.
    generation: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            lines: RwLock::new(Vec::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
