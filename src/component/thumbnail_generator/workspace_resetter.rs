use crate::tools::ensure_directory_exists;
use console::style;
use log::{info, warn};
use rust_i18n::t;
use std::fs;
use std::path::Path;

/// 輸出資料夾重置結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStatus {
    /// 資料夾已重建且為空
    Fresh,
    /// 刪除失敗，資料夾仍存在但可能殘留舊檔
    StaleContents,
    /// 無法建立資料夾
    Unavailable,
}

/// 刪除並重建輸出資料夾
///
/// 任何錯誤都只記錄警告，不中斷流程。
pub fn reset_workspace(output_dir: &Path) -> ResetStatus {
    let mut removal_failed = false;

    if output_dir.exists() {
        println!(
            "\n{}",
            style(t!("cleanup.start", path = output_dir.display())).dim()
        );
        match fs::remove_dir_all(output_dir) {
            Ok(()) => {
                println!("{} {}", style("✓").green(), t!("cleanup.done"));
                info!("已刪除舊縮圖資料夾: {}", output_dir.display());
            }
            Err(e) => {
                removal_failed = true;
                println!(
                    "{} {}",
                    style("✗").red(),
                    t!("cleanup.failed", error = e)
                );
                warn!("無法刪除舊縮圖資料夾 {}: {e}", output_dir.display());
            }
        }
    }

    if let Err(e) = ensure_directory_exists(output_dir) {
        println!(
            "{} {}",
            style("✗").red(),
            t!("cleanup.create_failed", error = format!("{e:#}"))
        );
        warn!("無法建立縮圖資料夾 {}: {e:#}", output_dir.display());
        return ResetStatus::Unavailable;
    }

    if removal_failed {
        ResetStatus::StaleContents
    } else {
        ResetStatus::Fresh
    }
}
