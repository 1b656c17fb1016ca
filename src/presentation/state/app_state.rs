use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, WavValidator};
use crate::application::services::TranscriptionService;

pub struct AppState<W, E>
where
    W: WavValidator,
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<W, E>>,
}

impl<W, E> Clone for AppState<W, E>
where
    W: WavValidator,
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
