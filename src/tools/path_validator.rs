use anyhow::{Result, bail};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 基底資料夾無法使用的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryProblem {
    #[error("does not exist")]
    Missing,
    #[error("is not a directory")]
    NotADirectory,
    #[error("is not writable")]
    ReadOnly,
}

/// 檢查路徑存在、為資料夾且可寫入
pub fn check_writable_directory(path: &Path) -> Result<(), DirectoryProblem> {
    let metadata = fs::metadata(path).map_err(|_| DirectoryProblem::Missing)?;

    if !metadata.is_dir() {
        return Err(DirectoryProblem::NotADirectory);
    }
    if metadata.permissions().readonly() || !has_write_access(path) {
        return Err(DirectoryProblem::ReadOnly);
    }
    Ok(())
}

/// 以目前行程的有效身分檢查寫入權限（擁有者、群組與 ACL）
#[cfg(unix)]
fn has_write_access(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path 是以 NUL 結尾的有效字串，呼叫期間保持存活
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn has_write_access(_path: &Path) -> bool {
    true
}

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writable_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(check_writable_directory(temp_dir.path()), Ok(()));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert_eq!(
            check_writable_directory(&missing),
            Err(DirectoryProblem::Missing)
        );
        assert!(validate_directory_exists(&missing).is_err());
    }

    #[test]
    fn test_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(
            check_writable_directory(&file),
            Err(DirectoryProblem::NotADirectory)
        );
        assert!(validate_directory_exists(&file).is_err());
    }

    #[test]
    fn test_readonly_directory() {
        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();

        let mut permissions = fs::metadata(&locked).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions.clone()).unwrap();

        assert_eq!(
            check_writable_directory(&locked),
            Err(DirectoryProblem::ReadOnly)
        );

        permissions.set_readonly(false);
        fs::set_permissions(&locked, permissions).unwrap();
    }

    /// 群組與其他人有寫入位元，但擁有者（目前使用者）沒有
    #[cfg(unix)]
    #[test]
    fn test_owner_denied_directory_with_write_bits() {
        use std::os::unix::fs::PermissionsExt;

        // root 會略過權限檢查
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let denied = temp_dir.path().join("denied");
        fs::create_dir(&denied).unwrap();
        fs::set_permissions(&denied, fs::Permissions::from_mode(0o577)).unwrap();

        assert!(!fs::metadata(&denied).unwrap().permissions().readonly());
        let result = check_writable_directory(&denied);

        fs::set_permissions(&denied, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(result, Err(DirectoryProblem::ReadOnly));
    }
}
