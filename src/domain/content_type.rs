/// Declared content types accepted for an audio upload.
///
/// `application/octet-stream` is allowed because common HTTP clients fall
/// back to it when the real MIME type is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioContentType {
    Wav,
    Wave,
    XWav,
    OctetStream,
}

impl AudioContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "audio/wav" => Some(Self::Wav),
            "audio/wave" => Some(Self::Wave),
            "audio/x-wav" => Some(Self::XWav),
            "application/octet-stream" => Some(Self::OctetStream),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Wave => "audio/wave",
            Self::XWav => "audio/x-wav",
            Self::OctetStream => "application/octet-stream",
        }
    }
}
