mod candle_whisper_engine;
mod hound_wav_validator;

pub use candle_whisper_engine::{prepare_samples, CandleWhisperEngine};
pub use hound_wav_validator::{
    HoundWavValidator, ALLOWED_CHANNELS, ALLOWED_SAMPLE_RATE, ALLOWED_SAMPLE_WIDTH_BYTES,
    MAX_AUDIO_DURATION_SECS,
};
