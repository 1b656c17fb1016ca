/// Format properties read from a WAV container's fmt chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavProperties {
    pub sample_rate: u32,
    pub channels: u16,
    pub sample_width_bytes: u16,
    pub frame_count: u32,
}

impl WavProperties {
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }
}

/// Raw 16-bit signed PCM extracted from a validated WAV upload.
///
/// Owned by the request that carried the upload; never shared across
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    pub properties: WavProperties,
    pub samples: Vec<i16>,
}
