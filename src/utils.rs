use number_prefix::NumberPrefix;
use std::{
    io,
    path::{Component, Path, PathBuf},
};

pub fn format_size(size: u64) -> String {
    match NumberPrefix::binary(size as f64) {
        NumberPrefix::Standalone(bytes) => format!("{} B", bytes),
        NumberPrefix::Prefixed(prefix, n) => format!("{:.1} {}B", n, prefix),
    }
}

/// Absolute form of `path` with `.` and `..` folded lexically.
/// Symlinks are left alone so a directory keeps the path it was reached by.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Label for a path in the UI; the filesystem root has no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_binary_prefixed() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
    }

    #[cfg(unix)]
    #[test]
    fn absolute_path_folds_dots() -> io::Result<()> {
        assert_eq!(
            absolute_path(Path::new("/tmp/proj/./lib/../b.txt"))?,
            PathBuf::from("/tmp/proj/b.txt")
        );
        assert_eq!(absolute_path(Path::new("/.."))?, PathBuf::from("/"));
        Ok(())
    }

    #[test]
    fn relative_path_is_made_absolute() -> io::Result<()> {
        let cwd = std::env::current_dir()?;
        assert_eq!(absolute_path(Path::new("."))?, cwd);
        assert!(absolute_path(Path::new("lib"))?.is_absolute());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn root_is_displayed_by_full_path() {
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("/tmp/proj")), "proj");
    }
}
