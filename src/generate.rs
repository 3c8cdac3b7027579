//! Writes the C dispatch artifact to disk
//!
//! The destination is opened for writing first, so a path the caller may not
//! write to fails up front. The artifact is then written to a temporary file
//! next to the symlink-resolved destination, with the destination's
//! permissions, and renamed over it. A failed write never leaves a truncated
//! file behind.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shim::{self, TARGETS};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the shims for [`TARGETS`] with `arity + 1` cases each and write
/// them to `path`.
pub fn write_c_artifact(path: &Path, arity: usize) -> Result<(), GenerateError> {
    let open_err = |source: io::Error| GenerateError::Open {
        path: path.to_path_buf(),
        source,
    };
    let write_err = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Creates the file with the default mode when missing; never truncates.
    let dest = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(open_err)?;
    #[cfg(unix)]
    let permissions = dest.metadata().map_err(open_err)?.permissions();
    drop(dest);
    let target = fs::canonicalize(path).map_err(open_err)?;

    let source = shim::render_c(TARGETS, arity);
    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        arity,
        bytes = source.len(),
        "rendered variadic shims"
    );

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".cpy-variadic");
    #[cfg(unix)]
    builder.permissions(permissions);
    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    file.write_all(source.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(&target).map_err(|e| write_err(e.error))?;

    tracing::info!(path = %path.display(), arity, "wrote variadic shims");
    Ok(())
}
