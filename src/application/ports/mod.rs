mod transcription_engine;
mod wav_validator;

pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use wav_validator::{WavValidationError, WavValidator};
