use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::application::ports::{
    TranscriptionEngine, TranscriptionError, WavValidationError, WavValidator,
};
use crate::domain::{AudioContentType, Transcript};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// Request-level error taxonomy for the transcription pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Unsupported media type: {0}. Expected WAV audio.")]
    UnsupportedMediaType(String),
    #[error("File too large: {actual} bytes. Max: {max} bytes.")]
    PayloadTooLarge { actual: usize, max: usize },
    #[error("Empty file received.")]
    EmptyFile,
    #[error(transparent)]
    InvalidWav(#[from] WavValidationError),
    #[error("STT service busy. Try again shortly.")]
    Busy,
    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Orchestrates a single upload through the pipeline: upload guard, WAV
/// validation, inference gate, model invocation, transcript normalization.
///
/// The gate is the only serialization point. Guard and validation are
/// stateless and run concurrently across requests; at most one request is
/// inside the engine at any time.
pub struct TranscriptionService<W, E>
where
    W: WavValidator,
    E: TranscriptionEngine,
{
    validator: Arc<W>,
    engine: Arc<E>,
    inference_gate: Mutex<()>,
    max_upload_bytes: usize,
    lock_timeout: Duration,
}

impl<W, E> TranscriptionService<W, E>
where
    W: WavValidator,
    E: TranscriptionEngine,
{
    pub fn new(
        validator: Arc<W>,
        engine: Arc<E>,
        max_upload_bytes: usize,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            validator,
            engine,
            inference_gate: Mutex::new(()),
            max_upload_bytes,
            lock_timeout,
        }
    }

    pub async fn transcribe(
        &self,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<Transcript, ServiceError> {
        if let Some(mime) = content_type {
            if AudioContentType::from_mime(mime).is_none() {
                return Err(ServiceError::UnsupportedMediaType(mime.to_string()));
            }
        }

        if data.len() > self.max_upload_bytes {
            return Err(ServiceError::PayloadTooLarge {
                actual: data.len(),
                max: self.max_upload_bytes,
            });
        }

        if data.is_empty() {
            return Err(ServiceError::EmptyFile);
        }

        let clip = self.validator.validate(data)?;

        tracing::debug!(
            sample_rate = clip.properties.sample_rate,
            frames = clip.properties.frame_count,
            duration_secs = clip.properties.duration_secs(),
            "WAV upload validated"
        );

        // Held across the engine call; dropped on every exit path.
        let _gate = tokio::time::timeout(self.lock_timeout, self.inference_gate.lock())
            .await
            .map_err(|_| ServiceError::Busy)?;

        let raw = self.engine.transcribe(&clip.samples).await?;

        tracing::info!(chars = raw.len(), "Transcription completed");

        Ok(Transcript::from_raw(&raw))
    }
}
