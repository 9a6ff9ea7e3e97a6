//! File discovery for the path arguments
//!
//! A path is either hashed directly (regular file) or walked (directory) down to a depth limit. Entries whose name
//! starts with a dot are skipped, symbolic links inside directories are not followed.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors that can occur during file discovery
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Path does not exist, or is neither a file nor a directory
    #[error("No file or directory")]
    NotFound(PathBuf),

    /// Depth argument could not be parsed
    #[error("invalid depth '{0}': expected a positive number, or -1 for no limit")]
    InvalidDepth(String),
}

/// How many directory levels are searched below a directory argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Depth {
    /// Only files at most this many levels deep are found; 1 means the direct children
    Limited(usize),
    Unlimited,
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Limited(1)
    }
}

impl FromStr for Depth {
    type Err = DiscoveryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().parse::<i64>() {
            Ok(-1) => Ok(Depth::Unlimited),
            Ok(depth) if depth >= 1 => Ok(Depth::Limited(depth as usize)),
            _ => Err(DiscoveryError::InvalidDepth(value.to_string())),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect the files denoted by ``path``. A regular file yields itself, a directory yields its regular files down to
/// ``depth``, sorted by file name within every directory.
pub fn discover_files(path: &Path, depth: Depth) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(path).map_err(|_| DiscoveryError::NotFound(path.to_path_buf()))?;

    if metadata.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !metadata.is_dir() {
        return Err(DiscoveryError::NotFound(path.to_path_buf()));
    }

    let mut walker = WalkDir::new(path).min_depth(1).sort_by_file_name();
    if let Depth::Limited(limit) = depth {
        walker = walker.max_depth(limit);
    }

    let mut files = Vec::new();
    for entry in walker.into_iter().filter_entry(|entry| !is_hidden(entry)) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => log::warn!("skipping unreadable entry below {}: {err}", path.display()),
        }
    }

    log::debug!("discovered {} files in {}", files.len(), path.display());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn create_tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join(".hidden"), b"hidden").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), b"c").unwrap();
        fs::create_dir(dir.path().join("nested").join("deeper")).unwrap();
        fs::write(dir.path().join("nested").join("deeper").join("d.txt"), b"d").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git").join("config"), b"config").unwrap();
        dir
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files.iter()
            .map(|file| file.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!("1".parse::<Depth>().unwrap(), Depth::Limited(1));
        assert_eq!("3".parse::<Depth>().unwrap(), Depth::Limited(3));
        assert_eq!("-1".parse::<Depth>().unwrap(), Depth::Unlimited);
        assert!("0".parse::<Depth>().is_err());
        assert!("-2".parse::<Depth>().is_err());
        assert!("deep".parse::<Depth>().is_err());
    }

    #[test]
    fn test_single_file() {
        let dir = create_tree();
        let file = dir.path().join("a.txt");

        assert_eq!(discover_files(&file, Depth::default()).unwrap(), vec![file]);
    }

    #[test]
    fn test_direct_children_only() {
        let dir = create_tree();
        let files = discover_files(dir.path(), Depth::Limited(1)).unwrap();

        assert_eq!(names(dir.path(), &files), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_depth_limit() {
        let dir = create_tree();
        let files = discover_files(dir.path(), Depth::Limited(2)).unwrap();

        assert_eq!(names(dir.path(), &files), vec!["a.txt", "b.txt", "nested/c.txt"]);
    }

    #[test]
    fn test_unlimited_depth_skips_hidden() {
        let dir = create_tree();
        let files = discover_files(dir.path(), Depth::Unlimited).unwrap();

        assert_eq!(names(dir.path(), &files), vec!["a.txt", "b.txt", "nested/c.txt", "nested/deeper/d.txt"]);
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        match discover_files(&missing, Depth::default()) {
            Err(DiscoveryError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
