//! 影片縮圖批次產生元件
//!
//! 三階段流程：
//! A. 重置輸出資料夾
//! B. 掃描來源影片
//! C. 依序以 ffmpeg 擷取單張縮圖並輸出摘要

mod ffmpeg_command;
mod frame_extractor;
mod main;
mod workspace_resetter;

pub use ffmpeg_command::{FfmpegCommand, ThumbnailTask};
pub use frame_extractor::{ExtractionError, FfmpegFrameExtractor, FrameExtractor};
pub use main::{GenerationResult, ThumbnailGenerator, ThumbnailResult};
pub use workspace_resetter::{ResetStatus, reset_workspace};
