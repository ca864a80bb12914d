use super::ffmpeg_command::ThumbnailTask;
use super::frame_extractor::{ExtractionError, FfmpegFrameExtractor, FrameExtractor};
use super::workspace_resetter::{ResetStatus, reset_workspace};
use crate::config::ThumbnailSettings;
use crate::tools::{SourceVideo, scan_candidate_videos};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 單一影片的處理結果
#[derive(Debug)]
pub struct ThumbnailResult {
    pub video_path: PathBuf,
    pub output_path: PathBuf,
    pub error: Option<ExtractionError>,
}

impl ThumbnailResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 批次縮圖結果
#[derive(Debug)]
pub struct GenerationResult {
    pub output_dir: PathBuf,
    pub reset_status: ResetStatus,
    /// 找到並嘗試處理的影片數
    pub total_videos: usize,
    /// 依處理順序排列
    pub results: Vec<ThumbnailResult>,
}

impl GenerationResult {
    #[must_use]
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.successful()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ThumbnailResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// 批次縮圖產生器
///
/// 流程：
/// 1. 刪除並重建輸出資料夾
/// 2. 掃描來源資料夾中的影片
/// 3. 依序為每部影片擷取一張縮圖，單一失敗不中斷批次
/// 4. 輸出摘要
pub struct ThumbnailGenerator<E> {
    settings: ThumbnailSettings,
    extractor: E,
}

impl ThumbnailGenerator<FfmpegFrameExtractor> {
    #[must_use]
    pub fn with_ffmpeg(settings: ThumbnailSettings) -> Self {
        let extractor = FfmpegFrameExtractor::new(settings.ffmpeg_path.clone());
        Self::new(settings, extractor)
    }
}

impl<E: FrameExtractor> ThumbnailGenerator<E> {
    pub const fn new(settings: ThumbnailSettings, extractor: E) -> Self {
        Self {
            settings,
            extractor,
        }
    }

    pub const fn settings(&self) -> &ThumbnailSettings {
        &self.settings
    }

    pub fn run(&self) -> GenerationResult {
        println!("{}", style(t!("generator.title")).cyan().bold());

        let output_dir = self.settings.output_directory();
        let reset_status = reset_workspace(&output_dir);

        let videos = scan_candidate_videos(
            &self.settings.source_directory,
            &self.settings.normalized_extensions(),
        );

        if videos.is_empty() {
            println!("{}", style(t!("scan.none")).yellow());
            info!(
                "來源資料夾沒有影片檔案: {}",
                self.settings.source_directory.display()
            );
            return GenerationResult {
                output_dir,
                reset_status,
                total_videos: 0,
                results: Vec::new(),
            };
        }

        println!(
            "\n{}",
            style(t!("scan.found", count = videos.len())).green()
        );
        println!("{}", t!("scan.saving_to", path = output_dir.display()));

        let results = self.process_videos(&videos, &output_dir);

        let result = GenerationResult {
            output_dir,
            reset_status,
            total_videos: videos.len(),
            results,
        };
        self.print_summary(&result);
        result
    }

    fn process_videos(&self, videos: &[SourceVideo], output_dir: &Path) -> Vec<ThumbnailResult> {
        let progress_bar = ProgressBar::new(videos.len() as u64);
        if let Ok(progress_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            progress_bar.set_style(progress_style.progress_chars("#>-"));
        }

        let mut results = Vec::with_capacity(videos.len());

        for video in videos {
            let video_name = video.file_name();
            progress_bar.set_message(video_name.clone());
            progress_bar.suspend(|| {
                println!(
                    "\n{}",
                    t!("process.start", name = style(&video_name).bold())
                );
            });

            let result = self.process_single_video(video, output_dir);
            progress_bar.suspend(|| Self::report_item(&video_name, &result));

            results.push(result);
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        results
    }

    /// 擷取單一影片的縮圖；錯誤收進結果而非往外傳
    fn process_single_video(&self, video: &SourceVideo, output_dir: &Path) -> ThumbnailResult {
        let task = ThumbnailTask {
            video_path: video.path.clone(),
            output_path: output_dir.join(video.thumbnail_file_name()),
            timestamp_seconds: self.settings.timestamp_seconds,
            width: self.settings.width,
            height: self.settings.height,
            jpeg_quality: self.settings.jpeg_quality,
        };

        debug!(
            "擷取縮圖: {} (.{}) 來源資料夾 {}",
            video.file_name(),
            video.extension,
            video.parent().display()
        );
        let error = self.extractor.extract_frame(&task).err();

        ThumbnailResult {
            video_path: task.video_path,
            output_path: task.output_path,
            error,
        }
    }

    fn report_item(video_name: &str, result: &ThumbnailResult) {
        match &result.error {
            None => {
                println!(
                    "{} {}",
                    style("✓").green(),
                    t!("process.success", path = result.output_path.display())
                );
                info!("縮圖已建立: {}", result.output_path.display());
            }
            Some(ExtractionError::ToolFailed { status, stderr }) => {
                println!(
                    "{} {}",
                    style("✗").red(),
                    t!("process.tool_failed", name = video_name)
                );
                if !stderr.is_empty() {
                    println!("{}", style(stderr).dim());
                }
                error!("ffmpeg 處理失敗 {video_name}（{status}）: {stderr}");
            }
            Some(e) => {
                println!(
                    "{} {}",
                    style("✗").red(),
                    t!("process.unexpected", name = video_name)
                );
                println!("{}", style(e).dim());
                error!("處理影片時發生未預期錯誤 {video_name}: {e}");
            }
        }
    }

    fn print_summary(&self, result: &GenerationResult) {
        println!();
        println!("{}", style(t!("summary.title")).cyan().bold());
        println!("  {}", t!("summary.attempted", count = result.total_videos));
        println!(
            "  {}",
            t!("summary.succeeded", count = style(result.successful()).green())
        );
        if result.failed() > 0 {
            println!(
                "  {}",
                t!("summary.failed", count = style(result.failed()).red())
            );
            for failure in result.failures() {
                println!("    - {}", failure.video_path.display());
            }
        }
        println!(
            "  {}",
            t!("summary.location", path = result.output_dir.display())
        );

        info!(
            "縮圖產生完成 - 總計: {}, 成功: {}, 失敗: {}, 輸出: {}",
            result.total_videos,
            result.successful(),
            result.failed(),
            result.output_dir.display()
        );
    }
}
