mod helpers;

use whisper_stt::application::ports::{WavValidationError, WavValidator};
use whisper_stt::infrastructure::audio::HoundWavValidator;

use helpers::{build_wav, silence_wav};

#[test]
fn given_valid_wav_when_validating_then_returns_pcm_and_properties() {
    let wav = silence_wav(2.0);
    let validator = HoundWavValidator::default();

    let clip = validator.validate(&wav).unwrap();

    assert_eq!(clip.properties.sample_rate, 16_000);
    assert_eq!(clip.properties.channels, 1);
    assert_eq!(clip.properties.sample_width_bytes, 2);
    assert_eq!(clip.properties.frame_count, 32_000);
    assert!((clip.properties.duration_secs() - 2.0).abs() < 1e-9);
    assert_eq!(clip.samples.len(), 32_000);
}

#[test]
fn given_wrong_sample_rate_when_validating_then_reports_actual_and_expected() {
    let wav = build_wav(44_100, 1, 16, 4410);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(
        err,
        WavValidationError::SampleRate { actual: 44_100, .. }
    ));
    let msg = err.to_string();
    assert!(msg.contains("44100"));
    assert!(msg.contains("16000"));
}

#[test]
fn given_stereo_wav_when_validating_then_reports_channel_mismatch() {
    let wav = build_wav(16_000, 2, 16, 1600);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(err, WavValidationError::Channels { actual: 2, .. }));
    let msg = err.to_string();
    assert!(msg.contains("channels"));
    assert!(msg.contains("mono (1)"));
}

#[test]
fn given_8_bit_wav_when_validating_then_reports_sample_width_mismatch() {
    let wav = build_wav(16_000, 1, 8, 1600);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(
        err,
        WavValidationError::SampleWidth { actual: 1, .. }
    ));
    assert!(err.to_string().contains("Expected 2 (16-bit)"));
}

#[test]
fn given_six_second_wav_when_validating_then_reports_duration_to_one_decimal() {
    let wav = silence_wav(6.0);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(err, WavValidationError::TooLong { .. }));
    let msg = err.to_string();
    assert!(msg.contains("6.0s"));
    assert!(msg.contains("5.0s"));
}

#[test]
fn given_exactly_five_second_wav_when_validating_then_passes() {
    let wav = silence_wav(5.0);
    let validator = HoundWavValidator::default();

    assert!(validator.validate(&wav).is_ok());
}

#[test]
fn given_garbage_bytes_when_validating_then_returns_malformed() {
    let garbage = vec![0xFFu8; 128];
    let validator = HoundWavValidator::default();

    let err = validator.validate(&garbage).unwrap_err();

    assert!(matches!(err, WavValidationError::Malformed(_)));
    assert!(err.to_string().starts_with("Invalid WAV file:"));
}

#[test]
fn given_truncated_header_when_validating_then_returns_malformed() {
    let wav = silence_wav(1.0);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav[..20]).unwrap_err();

    assert!(matches!(err, WavValidationError::Malformed(_)));
}

#[test]
fn given_wrong_rate_and_stereo_when_validating_then_rate_error_wins() {
    let wav = build_wav(8_000, 2, 16, 800);
    let validator = HoundWavValidator::default();

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(err, WavValidationError::SampleRate { .. }));
}

#[test]
fn given_custom_duration_cap_when_validating_then_cap_is_honored() {
    let wav = silence_wav(2.0);
    let validator = HoundWavValidator::new(1.5);

    let err = validator.validate(&wav).unwrap_err();

    assert!(matches!(err, WavValidationError::TooLong { .. }));
}
