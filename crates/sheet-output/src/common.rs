//! Shared output utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Create `dir` when missing. Returns `true` when it had to be created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(true)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_output_dir(parent)?;
    }
    Ok(())
}

/// Write already serialized XML to `path`, replacing any existing file.
pub fn write_xml_file(path: &Path, xml: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, xml).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), bytes = xml.len(), "wrote character xml");
    Ok(())
}
