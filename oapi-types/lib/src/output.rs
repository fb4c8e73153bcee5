//! Writing generated types to disk.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::TypesError;

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. The temp file gets a unique name
/// in the target's directory and is removed if the write or rename fails.
/// Readers see either the previous file or the complete new one, never a
/// partial write.
///
/// ## Errors
///
/// Returns [`TypesError::Write`] if:
/// - `path` has no file name
/// - Parent directories cannot be created
/// - The temp file cannot be created or written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), TypesError> {
    let write_error = |path: &Path, source: io::Error| TypesError::Write {
        path: path.to_path_buf(),
        source,
    };

    if path.file_name().is_none() {
        return Err(write_error(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        ));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(parent, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_error(temp.path(), e))?;
    temp.persist(path).map_err(|e| write_error(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/deeper/types.ts");

        write_atomic(&target, "export type A = {\n}\n\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "export type A = {\n}\n\n");
        assert_eq!(entries(&dir.path().join("nested/deeper")), ["types.ts"]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("types.ts");
        fs::write(&target, "old").unwrap();

        write_atomic(&target, "new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn leaves_unrelated_siblings_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("types.ts");
        let sibling = dir.path().join("types.ts.tmp");
        fs::write(&sibling, "keep me").unwrap();

        write_atomic(&target, "new").unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert_eq!(entries(dir.path()), ["types.ts", "types.ts.tmp"]);
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let target = dir.path().join("types.ts");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inner"), "x").unwrap();

        let err = write_atomic(&target, "new").unwrap_err();

        assert!(matches!(err, TypesError::Write { .. }));
        assert_eq!(entries(dir.path()), ["types.ts"]);
    }

    #[test]
    fn rejects_path_without_file_name() {
        let err = write_atomic(Path::new("/"), "x").unwrap_err();
        assert!(matches!(err, TypesError::Write { .. }));
    }
}
