use aerial_thumbnailer::component::ThumbnailGenerator;
use aerial_thumbnailer::config::Config;
use aerial_thumbnailer::init;
use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    init::init();

    // 載入設定並切換語系
    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let generator = ThumbnailGenerator::with_ffmpeg(config.settings.thumbnail);
    let result = generator.run();

    // 單一檔案失敗不影響結束碼
    info!(
        "Program exited normally - attempted: {}, succeeded: {}, failed: {}",
        result.total_videos,
        result.successful(),
        result.failed()
    );

    Ok(())
}
