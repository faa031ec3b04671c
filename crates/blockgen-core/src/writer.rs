//! Persists generated files.

use std::path::{Path, PathBuf};

use crate::emitter::EmitterKind;
use crate::error::Result;

/// A fully rendered output file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: EmitterKind,
    pub contents: String,
}

/// Create or overwrite `path` with `text`.
///
/// Parent directories are never created; a missing directory surfaces as the
/// underlying [`std::io::Error`].
pub fn write(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote generated file");
    Ok(())
}

/// Write `file` into `output_dir`, returning the path written.
pub fn write_into(output_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let path = output_dir.join(file.kind.file_name());
    write(&path, &file.contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlockGenError;

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Factory.cpp");
        write(&path, "first version, rather long\n").unwrap();
        write(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-created");
        let file = GeneratedFile {
            kind: EmitterKind::Factory,
            contents: String::new(),
        };
        let err = write_into(&missing, &file).unwrap_err();
        match err {
            BlockGenError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!missing.exists());
    }

    #[test]
    fn test_write_into_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile {
            kind: EmitterKind::ExecutionTest,
            contents: "// test\n".into(),
        };
        let path = write_into(dir.path(), &file).unwrap();
        assert_eq!(path, dir.path().join("BlockExecutionTestAuto.cpp"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "// test\n");
    }
}
