use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> ReportResult<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| ReportError::OutputWriteFailure {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!("Created directory {}", dir.display());
    Ok(())
}

/// Replace the file at `path` with `content`.
///
/// A stale file is removed first and the parent directory is created when
/// missing. Returns the size of the written file in bytes.
pub fn write_fresh(path: &Path, content: &[u8]) -> ReportResult<u64> {
    let write_err = |source: std::io::Error| ReportError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if path.exists() {
        std::fs::remove_file(path).map_err(write_err)?;
        info!("Removed stale {}", path.display());
    }

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    std::fs::write(path, content).map_err(write_err)?;

    let size = std::fs::metadata(path).map_err(write_err)?.len();
    Ok(size)
}

/// Write the rendered HTML report.
pub fn write_report(path: &Path, html: &str) -> ReportResult<u64> {
    let size = write_fresh(path, html.as_bytes())?;
    info!(
        "Report written to {} ({:.2} KB)",
        path.display(),
        size as f64 / 1024.0
    );
    Ok(size)
}

/// Write a value as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T, context: &str) -> ReportResult<u64> {
    let json = serde_json::to_string_pretty(value).map_err(|source| ReportError::Serialize {
        context: context.to_string(),
        source,
    })?;
    let size = write_fresh(path, json.as_bytes())?;
    info!("Wrote {} to {}", context, path.display());
    Ok(size)
}
