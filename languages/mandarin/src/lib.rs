pub mod annotator;
pub mod hsk;
pub mod lines;
pub mod lookup;
pub mod vocabulary;

pub use annotator::MandarinAnnotator;
pub use hsk::HskLevel;
pub use lines::{KNOWN_LINES, SAMPLE_LYRICS};
pub use lookup::MandarinLookup;
pub use vocabulary::HskVocabulary;
