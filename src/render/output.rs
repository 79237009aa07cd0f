use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Write `bytes` to `path` without ever leaving a partial file behind.
///
/// The data goes to a hidden temporary file in the target directory, which is
/// renamed over `path` once fully written and synced.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let fail = |source: io::Error| RenderError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let tmp = temp_path(path).ok_or_else(|| {
        fail(io::Error::new(
            ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    log::debug!("Writing {} bytes via {}", bytes.len(), tmp.display());

    let result = File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&tmp, path));

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            if cleanup.kind() != ErrorKind::NotFound {
                log::warn!(
                    "Failed to remove temporary file {}: {}",
                    tmp.display(),
                    cleanup
                );
            }
        }
        return Err(fail(e));
    }

    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Hidden sibling of `path` unique to this process
fn temp_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let tmp_name = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Some(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("keyword-bingo-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_writes_and_replaces() {
        let dir = scratch_dir("atomic");
        let path = dir.join("card.png");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        // Only the target remains
        let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_fails_cleanly() {
        let dir = scratch_dir("missing").join("nope");
        let path = dir.join("card.png");

        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, RenderError::OutputWriteFailed { path: p, .. } if p == path));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let tmp = temp_path(Path::new("out/card.png")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("out")));
        assert!(tmp
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".card.png."));
        assert!(temp_path(Path::new("/")).is_none());
    }
}
