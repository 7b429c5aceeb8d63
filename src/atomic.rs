//! Atomic replacement of the projects list.
//!
//! The listing is written to `<target>.<pid>.tmp` next to the target, flushed
//! and synced, then renamed over the target. Readers of the target see either
//! the previous listing or the complete new one, never a partial file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;

use log::debug;

use crate::error::{Error, Result};

/// Temporary path used while writing `target`.
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(format!(".{}.tmp", process::id()));
    PathBuf::from(name)
}

/// Write `target` through `write` and atomically move it into place.
///
/// If `write` or any step before the rename fails, the temporary file is
/// removed and `target` is left untouched.
pub fn write_atomically<T, F>(target: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let tmp = temp_path_for(target);
    debug!("Writing {} via {}", target.display(), tmp.display());

    let result = write_temp(&tmp, write);
    let value = match result {
        Ok(value) => value,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };

    fs::rename(&tmp, target).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::Output {
            path: target.to_path_buf(),
            message: format!("Failed to rename {}: {}", tmp.display(), e),
        }
    })?;

    Ok(value)
}

fn write_temp<T, F>(tmp: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let file = File::create(tmp).map_err(|e| Error::Output {
        path: tmp.to_path_buf(),
        message: format!("Failed to create temporary file: {}", e),
    })?;

    let mut writer = BufWriter::new(file);
    let value = write(&mut writer)?;

    // Dropping a BufWriter swallows flush errors, so flush and sync explicitly.
    let file = writer.into_inner().map_err(|e| Error::Output {
        path: tmp.to_path_buf(),
        message: format!("Failed to flush temporary file: {}", e.error()),
    })?;
    file.sync_all().map_err(|e| Error::Output {
        path: tmp.to_path_buf(),
        message: format!("Failed to sync temporary file: {}", e),
    })?;

    Ok(value)
}
