mod settings;

pub use settings::{ModelSettings, ServerSettings, Settings, UploadSettings};
