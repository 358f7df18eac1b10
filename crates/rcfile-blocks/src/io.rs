//! Atomic file replacement that keeps the target's permission bits

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Replace `path` with `content` using write-to-temp-then-rename.
///
/// The temp file lives in the target's directory so the rename stays on
/// one filesystem; a reader sees either the old content or the new, never
/// a truncated intermediate. When the target already exists its permission
/// bits are copied onto the temp file before the rename, so replacing the
/// file does not reset its mode. The parent directory must exist.
pub fn replace_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    drop(temp_file);

    match fs::metadata(path) {
        Ok(meta) => {
            fs::set_permissions(&temp_path, meta.permissions())
                .map_err(|e| Error::io(&temp_path, e))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path, e)),
    }

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}
