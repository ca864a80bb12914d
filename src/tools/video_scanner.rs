use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const THUMBNAIL_SUFFIX: &str = "_thumbnail.jpg";

/// 來源影片（唯讀）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVideo {
    pub path: PathBuf,
    /// 正規化後（小寫）的副檔名
    pub extension: String,
}

impl SourceVideo {
    #[must_use]
    pub fn stem(&self) -> &OsStr {
        self.path.file_stem().unwrap_or_default()
    }

    /// 所在資料夾
    #[must_use]
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    #[must_use]
    pub fn thumbnail_file_name(&self) -> OsString {
        thumbnail_file_name(self.stem())
    }
}

/// `<stem>_thumbnail.jpg`
#[must_use]
pub fn thumbnail_file_name(stem: &OsStr) -> OsString {
    let mut name = stem.to_os_string();
    name.push(THUMBNAIL_SUFFIX);
    name
}

/// 掃描資料夾第一層中符合副檔名的影片
///
/// 依 `extensions` 的順序分組，組內依檔名排序。
/// `extensions` 須已正規化（小寫、無前導 `.`）。
/// 資料夾不存在或無法讀取時回傳空列表。
#[must_use]
pub fn scan_candidate_videos(directory: &Path, extensions: &[String]) -> Vec<SourceVideo> {
    let mut entries: Vec<SourceVideo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let extension = entry.path().extension()?.to_str()?.to_lowercase();
            Some(SourceVideo {
                path: entry.into_path(),
                extension,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    extensions
        .iter()
        .flat_map(|wanted| {
            entries
                .iter()
                .filter(move |video| &video.extension == wanted)
                .cloned()
        })
        .collect()
}
