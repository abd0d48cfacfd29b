use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Platform text-to-speech via an external command ("say" on macOS,
/// "espeak-ng" elsewhere by default). The command receives its configured
/// arguments followed by the text to speak.
#[derive(Clone)]
pub struct SpeechEngine {
    command: String,
    args: Vec<String>,
}

impl SpeechEngine {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Speak one line of text; resolves when playback finishes
    pub async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        tracing::debug!("Speaking via '{}': {}", self.command, text);

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(text)
            .status()
            .await
            .map_err(|source| SpeechError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SpeechError::Failed {
                command: self.command.clone(),
                status,
            });
        }

        Ok(())
    }
}
