mod content_type;
mod transcript;
mod wav;

pub use content_type::AudioContentType;
pub use transcript::Transcript;
pub use wav::{PcmBuffer, WavProperties};
