use async_trait::async_trait;

/// Speech-to-text backend operating on validated 16 kHz mono 16-bit PCM.
///
/// Implementations own the loaded model for the life of the process. Callers
/// must serialize invocations; concurrent transcription against one model
/// instance is undefined behavior for the underlying library.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, pcm: &[i16]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}
