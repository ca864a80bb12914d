use crate::tools::format_timestamp;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 單張縮圖擷取任務
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailTask {
    pub video_path: PathBuf,
    pub output_path: PathBuf,
    pub timestamp_seconds: f64,
    pub width: u32,
    pub height: u32,
    pub jpeg_quality: u8,
}

/// 組出擷取單一影格的 ffmpeg 指令
pub struct FfmpegCommand<'a> {
    program: &'a Path,
    task: &'a ThumbnailTask,
}

impl<'a> FfmpegCommand<'a> {
    #[must_use]
    pub const fn new(program: &'a Path, task: &'a ThumbnailTask) -> Self {
        Self { program, task }
    }

    /// `-ss` 放在 `-i` 之後：逐格解碼到目標時間點，取得精準的影格
    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(self.program);

        cmd.args(["-hide_banner", "-nostdin", "-loglevel", "error", "-y"]);
        cmd.arg("-i").arg(&self.task.video_path);
        cmd.args([
            "-ss".to_string(),
            format_timestamp(self.task.timestamp_seconds),
            "-frames:v".to_string(),
            "1".to_string(),
            "-vf".to_string(),
            format!("scale={}:{}", self.task.width, self.task.height),
            "-q:v".to_string(),
            self.task.jpeg_quality.to_string(),
            "-fflags".to_string(),
            "+bitexact".to_string(),
            "-flags:v".to_string(),
            "+bitexact".to_string(),
        ]);
        cmd.arg(&self.task.output_path);

        cmd.stdin(Stdio::null());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> ThumbnailTask {
        ThumbnailTask {
            video_path: PathBuf::from("/videos/beach.mp4"),
            output_path: PathBuf::from("/videos/thumbnails/beach_thumbnail.jpg"),
            timestamp_seconds: 5.0,
            width: 1920,
            height: 1080,
            jpeg_quality: 2,
        }
    }

    #[test]
    fn test_build_command_args() {
        let task = sample_task();
        let cmd = FfmpegCommand::new(Path::new("ffmpeg"), &task).build_command();

        assert_eq!(cmd.get_program(), "ffmpeg");
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-nostdin",
                "-loglevel",
                "error",
                "-y",
                "-i",
                "/videos/beach.mp4",
                "-ss",
                "00:00:05.000",
                "-frames:v",
                "1",
                "-vf",
                "scale=1920:1080",
                "-q:v",
                "2",
                "-fflags",
                "+bitexact",
                "-flags:v",
                "+bitexact",
                "/videos/thumbnails/beach_thumbnail.jpg",
            ]
        );
    }

    #[test]
    fn test_build_command_uses_custom_program() {
        let task = ThumbnailTask {
            timestamp_seconds: 12.5,
            width: 640,
            height: 360,
            ..sample_task()
        };
        let cmd = FfmpegCommand::new(Path::new("/opt/ffmpeg/bin/ffmpeg"), &task).build_command();

        assert_eq!(cmd.get_program(), "/opt/ffmpeg/bin/ffmpeg");
        let args: Vec<_> = cmd.get_args().collect();
        assert!(args.contains(&std::ffi::OsStr::new("00:00:12.500")));
        assert!(args.contains(&std::ffi::OsStr::new("scale=640:360")));
    }
}
