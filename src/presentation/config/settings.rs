use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub model: ModelSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_upload_bytes: usize,
    pub max_duration_secs: f64,
    pub lock_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub model_id: String,
}

impl Settings {
    /// Build settings from environment variables, falling back to the fixed
    /// service defaults (1 MiB upload cap, 5 s clip cap, 10 s gate wait,
    /// Whisper base model).
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0".to_string()),
                port: env_or("SERVER_PORT", 8000),
            },
            upload: UploadSettings {
                max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 1024 * 1024),
                max_duration_secs: env_or("MAX_AUDIO_DURATION_SECS", 5.0),
                lock_timeout_secs: env_or("LOCK_TIMEOUT_SECS", 10),
            },
            model: ModelSettings {
                model_id: env_or("WHISPER_MODEL", "openai/whisper-base".to_string()),
            },
        }
    }
}

impl UploadSettings {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_secs(self.lock_timeout_secs)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
