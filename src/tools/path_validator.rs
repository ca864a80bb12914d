use anyhow::{Context, Result, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 只建立最末層資料夾；上層不存在時回傳錯誤而非一併建立
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if !path.is_dir() {
                bail!("路徑不是資料夾: {}", path.display());
            }
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("無法建立資料夾: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_leaf_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("thumbnails");

        ensure_directory_exists(&target).unwrap();
        assert!(target.is_dir());

        // 已存在時不應報錯
        ensure_directory_exists(&target).unwrap();
    }

    #[test]
    fn test_does_not_create_missing_parents() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("Aerial Lcoal");
        let target = parent.join("thumbnails");

        assert!(ensure_directory_exists(&target).is_err());
        assert!(!parent.exists());
    }

    #[test]
    fn test_rejects_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("thumbnails");
        std::fs::write(&target, b"not a directory").unwrap();

        assert!(ensure_directory_exists(&target).is_err());
    }
}
