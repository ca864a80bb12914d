pub mod load;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{
    Config, DEFAULT_HEIGHT, DEFAULT_JPEG_QUALITY, DEFAULT_TIMESTAMP_SECONDS, DEFAULT_WIDTH,
    Language, ThumbnailSettings, UserSettings,
};
