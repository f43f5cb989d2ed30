use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info};

/// Where the calendar landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Write `contents` to `path`, replacing any previous file. Failures are
/// logged and reported as `false`.
pub fn write_calendar(path: &Path, contents: &str) -> bool {
    match try_write(path, contents) {
        Ok(written) => {
            info!(path = %written.path.display(), bytes = written.bytes, "ICS file written");
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to write ICS file");
            false
        }
    }
}

/// Same as [`write_calendar`] but hands back the error. Missing parent directories are created.
pub fn try_write(path: &Path, contents: &str) -> io::Result<Written> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;

    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let bytes = fs::metadata(&absolute)?.len();
    Ok(Written { path: absolute, bytes })
}
