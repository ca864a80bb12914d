use super::ffmpeg_command::{FfmpegCommand, ThumbnailTask};
use log::debug;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// 單張縮圖擷取失敗的原因
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 外部工具以非零狀態結束
    #[error("ffmpeg 執行失敗（{status}）: {stderr}")]
    ToolFailed { status: ExitStatus, stderr: String },
    /// 工具回報成功但沒有產生檔案
    #[error("縮圖檔案未建立: {}", .0.display())]
    MissingOutput(PathBuf),
    #[error("無法執行 ffmpeg: {0}")]
    Spawn(#[from] io::Error),
}

impl ExtractionError {
    #[must_use]
    pub const fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ToolFailed { .. })
    }
}

/// 從影片擷取一張影格並寫入 `task.output_path`
pub trait FrameExtractor {
    fn extract_frame(&self, task: &ThumbnailTask) -> Result<(), ExtractionError>;
}

impl<T: FrameExtractor + ?Sized> FrameExtractor for &T {
    fn extract_frame(&self, task: &ThumbnailTask) -> Result<(), ExtractionError> {
        (**self).extract_frame(task)
    }
}

/// 呼叫外部 ffmpeg 的實作
#[derive(Debug, Clone)]
pub struct FfmpegFrameExtractor {
    program: PathBuf,
}

impl FfmpegFrameExtractor {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FrameExtractor for FfmpegFrameExtractor {
    fn extract_frame(&self, task: &ThumbnailTask) -> Result<(), ExtractionError> {
        let mut cmd = FfmpegCommand::new(&self.program, task).build_command();
        debug!("執行 ffmpeg: {cmd:?}");

        let output = cmd.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::ToolFailed {
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        // 確認輸出檔案存在
        if !task.output_path.is_file() {
            return Err(ExtractionError::MissingOutput(task.output_path.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn task_in(dir: &TempDir) -> ThumbnailTask {
        ThumbnailTask {
            video_path: dir.path().join("missing.mp4"),
            output_path: dir.path().join("missing_thumbnail.jpg"),
            timestamp_seconds: 5.0,
            width: 1920,
            height: 1080,
            jpeg_quality: 2,
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegFrameExtractor::new(dir.path().join("no-such-ffmpeg"));

        let err = extractor.extract_frame(&task_in(&dir)).unwrap_err();
        assert!(matches!(err, ExtractionError::Spawn(_)));
        assert!(!err.is_tool_failure());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failure() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegFrameExtractor::new("false");

        let err = extractor.extract_frame(&task_in(&dir)).unwrap_err();
        assert!(err.is_tool_failure());
        match err {
            ExtractionError::ToolFailed { status, .. } => assert_eq!(status.code(), Some(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_success_without_output_is_missing_output() {
        let dir = TempDir::new().unwrap();
        let extractor = FfmpegFrameExtractor::new("true");
        let task = task_in(&dir);

        let err = extractor.extract_frame(&task).unwrap_err();
        match err {
            ExtractionError::MissingOutput(path) => assert_eq!(path, task.output_path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
