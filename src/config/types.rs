use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_SOURCE_DIRECTORY: &str = "/Users/Shared/Aerial Local/Additional Videos";
pub const DEFAULT_OUTPUT_DIRECTORY_NAME: &str = "thumbnails";
pub const DEFAULT_TIMESTAMP_SECONDS: f64 = 5.0;
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
/// ffmpeg `-q:v`，數值越小品質越高
pub const DEFAULT_JPEG_QUALITY: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::TraditionalChinese => "zh-TW",
        }
    }
}

/// 縮圖批次設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    pub source_directory: PathBuf,
    /// 建立在來源資料夾底下的輸出子資料夾名稱
    pub output_directory_name: String,
    /// 依宣告順序處理的副檔名列表
    pub video_extensions: Vec<String>,
    pub timestamp_seconds: f64,
    pub width: u32,
    pub height: u32,
    pub jpeg_quality: u8,
    pub ffmpeg_path: PathBuf,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
            output_directory_name: DEFAULT_OUTPUT_DIRECTORY_NAME.to_string(),
            video_extensions: vec!["mp4".to_string(), "mov".to_string()],
            timestamp_seconds: DEFAULT_TIMESTAMP_SECONDS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            ffmpeg_path: PathBuf::from("ffmpeg"),
        }
    }
}

impl ThumbnailSettings {
    /// 以指定來源資料夾建立其餘皆為預設值的設定
    #[must_use]
    pub fn for_source(source_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn output_directory(&self) -> PathBuf {
        self.source_directory.join(&self.output_directory_name)
    }

    /// 正規化後的副檔名：去掉前導 `.`、轉小寫、保留第一次出現的順序
    #[must_use]
    pub fn normalized_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = Vec::with_capacity(self.video_extensions.len());
        for ext in &self.video_extensions {
            let ext = ext.trim().trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        extensions
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "縮圖尺寸無效: {}x{}",
            self.width,
            self.height
        );
        ensure!(
            (1..=31).contains(&self.jpeg_quality),
            "JPEG 品質必須介於 1 到 31: {}",
            self.jpeg_quality
        );
        ensure!(
            self.timestamp_seconds.is_finite() && self.timestamp_seconds >= 0.0,
            "擷取時間點無效: {}",
            self.timestamp_seconds
        );
        ensure!(
            !self.normalized_extensions().is_empty(),
            "至少需要一個影片副檔名"
        );

        let mut components = Path::new(&self.output_directory_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => bail!(
                "輸出資料夾名稱必須是單一資料夾名稱: {}",
                self.output_directory_name
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub thumbnail: ThumbnailSettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
