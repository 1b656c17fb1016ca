use crate::domain::PcmBuffer;

/// Parses an uploaded byte buffer as a canonical WAV container and checks it
/// against the fixed audio profile the model expects.
pub trait WavValidator: Send + Sync {
    fn validate(&self, data: &[u8]) -> Result<PcmBuffer, WavValidationError>;
}

/// Checks are applied in declaration order and short-circuit on the first
/// failure: structure, then rate, channels, width, duration.
#[derive(Debug, thiserror::Error)]
pub enum WavValidationError {
    #[error("Invalid WAV file: {0}")]
    Malformed(String),
    #[error("Invalid sample rate: {actual}. Expected {expected}.")]
    SampleRate { actual: u32, expected: u32 },
    #[error("Invalid channels: {actual}. Expected mono ({expected}).")]
    Channels { actual: u16, expected: u16 },
    #[error("Invalid sample width: {actual} bytes. Expected {expected} (16-bit).")]
    SampleWidth { actual: u16, expected: u16 },
    #[error("Audio too long: {actual:.1}s. Max: {max:.1}s.")]
    TooLong { actual: f64, max: f64 },
}
