//! JSON output

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write `value` as 2-space indented JSON, creating the parent directory
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| Error::FileAccess {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
