use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 從目前工作目錄的 `settings.json` 載入設定
    pub fn new() -> Result<Self> {
        Self::from_path(Path::new(SETTINGS_FILE))
    }

    /// 檔案不存在時使用預設值；無法讀取或解析時回傳錯誤
    pub fn from_path(path: &Path) -> Result<Self> {
        let settings = Self::load_settings(path)?;

        settings
            .thumbnail
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;

        Ok(Self { settings })
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
