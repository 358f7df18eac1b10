//! Reconciles a file's managed block with the desired state

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::block;
use crate::error::{Error, Result};
use crate::io;

/// Ensure the managed block in `path` matches the desired state.
///
/// With `present` the block is created or rewritten to hold exactly
/// `lines`; without it the block is removed. Unmanaged content around the
/// block is preserved byte for byte. A file whose content would become
/// empty is deleted, and a missing file stays missing when the block is
/// not wanted. The operation is idempotent: once the file matches the
/// desired state, repeating the call changes nothing.
///
/// The rewrite goes through a temp-file-and-rename, so a concurrent reader
/// never observes partial content and the file's permission bits survive
/// the replacement. No locking is performed against other writers.
pub fn reconcile<S: AsRef<str>>(path: &Path, lines: &[S], present: bool) -> Result<()> {
    let current = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => io::read_text(path)?,
        Ok(_) => {
            return Err(Error::NotAFile { path: path.into() });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let target = block::render(&block::split(""), lines, present);
            if !target.is_empty() {
                io::replace_atomic(path, &target)?;
            }
            return Ok(());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let target = block::render(&block::split(&current), lines, present);

    if target == current {
        tracing::debug!(?path, "managed block already up to date");
        return Ok(());
    }

    if target.is_empty() {
        tracing::debug!(?path, "no content left after removing block, deleting file");
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    } else {
        io::replace_atomic(path, &target)?;
    }

    Ok(())
}
