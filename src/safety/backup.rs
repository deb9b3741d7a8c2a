use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy an episode file aside before its tag is rewritten
pub fn create_backup(file_path: &Path) -> Result<PathBuf> {
    let backup_path = backup_path_for(file_path);

    fs::copy(file_path, &backup_path).with_context(|| {
        format!(
            "Failed to create backup: {} -> {}",
            file_path.display(),
            backup_path.display()
        )
    })?;

    Ok(backup_path)
}

/// Get the backup path for a file
pub fn backup_path_for(file_path: &Path) -> PathBuf {
    let mut backup = file_path.to_path_buf();
    let mut name = backup.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    backup.set_file_name(name);
    backup
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.0} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_for() {
        let path = Path::new("/home/user/episode.mp3");
        let backup = backup_path_for(path);
        assert_eq!(backup, PathBuf::from("/home/user/episode.mp3.bak"));
    }

    #[test]
    fn test_create_backup_copies_contents() {
        let temp = TempDir::new().unwrap();
        let episode = temp.path().join("episode.mp3");
        fs::write(&episode, b"ID3 audio").unwrap();

        let backup = create_backup(&episode).unwrap();
        assert_eq!(backup, temp.path().join("episode.mp3.bak"));
        assert_eq!(fs::read(&backup).unwrap(), b"ID3 audio".to_vec());
    }

    #[test]
    fn test_create_backup_missing_file() {
        assert!(create_backup(Path::new("/nonexistent/episode.mp3")).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_size(523 * 1024 * 1024), "523 MB");
    }
}
