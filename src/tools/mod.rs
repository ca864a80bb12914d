mod path_validator;
mod time_format;
mod video_scanner;

pub use path_validator::ensure_directory_exists;
pub use time_format::format_timestamp;
pub use video_scanner::{
    SourceVideo, THUMBNAIL_SUFFIX, scan_candidate_videos, thumbnail_file_name,
};
