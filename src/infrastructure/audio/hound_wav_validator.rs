use std::io::Cursor;

use crate::application::ports::{WavValidationError, WavValidator};
use crate::domain::{PcmBuffer, WavProperties};

pub const ALLOWED_SAMPLE_RATE: u32 = 16_000;
pub const ALLOWED_CHANNELS: u16 = 1;
pub const ALLOWED_SAMPLE_WIDTH_BYTES: u16 = 2;
pub const MAX_AUDIO_DURATION_SECS: f64 = 5.0;

/// Strict WAV validator backed by `hound`.
///
/// Non-conforming audio is rejected, never converted: the service's contract
/// is a fixed 16 kHz / mono / 16-bit PCM profile, so there is no resampling
/// or downmixing stage.
pub struct HoundWavValidator {
    max_duration_secs: f64,
}

impl HoundWavValidator {
    pub fn new(max_duration_secs: f64) -> Self {
        Self { max_duration_secs }
    }
}

impl Default for HoundWavValidator {
    fn default() -> Self {
        Self::new(MAX_AUDIO_DURATION_SECS)
    }
}

impl WavValidator for HoundWavValidator {
    fn validate(&self, data: &[u8]) -> Result<PcmBuffer, WavValidationError> {
        let mut reader = hound::WavReader::new(Cursor::new(data))
            .map_err(|e| WavValidationError::Malformed(e.to_string()))?;

        let spec = reader.spec();
        let frame_count = reader.duration();

        // Fixed check order for deterministic error messages:
        // rate, then channels, then width, then duration.
        if spec.sample_rate != ALLOWED_SAMPLE_RATE {
            return Err(WavValidationError::SampleRate {
                actual: spec.sample_rate,
                expected: ALLOWED_SAMPLE_RATE,
            });
        }

        if spec.channels != ALLOWED_CHANNELS {
            return Err(WavValidationError::Channels {
                actual: spec.channels,
                expected: ALLOWED_CHANNELS,
            });
        }

        if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
            return Err(WavValidationError::SampleWidth {
                actual: spec.bits_per_sample / 8,
                expected: ALLOWED_SAMPLE_WIDTH_BYTES,
            });
        }

        let properties = WavProperties {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            sample_width_bytes: ALLOWED_SAMPLE_WIDTH_BYTES,
            frame_count,
        };

        let duration = properties.duration_secs();
        if duration > self.max_duration_secs {
            return Err(WavValidationError::TooLong {
                actual: duration,
                max: self.max_duration_secs,
            });
        }

        let samples = reader
            .samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| WavValidationError::Malformed(e.to_string()))?;

        Ok(PcmBuffer {
            properties,
            samples,
        })
    }
}
