// Timetable Tool - platform/fs.rs
//
// Filesystem helpers for writing exported timetables.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Sibling temp path used while writing `path`: `<name>.tmp` in the same
/// directory, so the final rename never crosses a filesystem boundary.
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", path.display()),
        )
    })?;
    let mut tmp_name = OsString::from(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Replace `path` with `contents` atomically (write temp, then rename).
///
/// An existing file at `path` is overwritten. A failure at any step leaves the
/// previous file untouched and removes the temp file. The temp file handle is
/// closed before the rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path)?;

    let written = std::fs::File::create(&tmp).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        e
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "File written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timetable.csv");
        write_atomic(&path, b"CS101,Intro,M\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"CS101,Intro,M\n");
        assert!(!dir.path().join("timetable.csv.tmp").exists());
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timetable.csv");
        std::fs::write(&path, b"old contents\nmore\n").unwrap();
        write_atomic(&path, b"new\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_atomic_ignores_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timetable.csv");
        std::fs::write(dir.path().join("timetable.csv.tmp"), b"garbage").unwrap();
        write_atomic(&path, b"fresh\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_write_atomic_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("timetable.csv");
        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
