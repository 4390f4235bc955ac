use std::fmt::Display;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

pub fn read_text(path: &Path) -> Result<String> {
    if !path.try_exists()? {
        bail!("File does not exist: {path:?}");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
}

/// refuses to clobber an existing file unless `force` is set
pub fn check_output(path: &Path, force: bool) -> Result<()> {
    if path.try_exists()? && !force {
        bail!("Output file {path:?} already exists, pass --force to overwrite it");
    }
    Ok(())
}

/// Writes one value per line, creating missing parent directories.
///
/// Returns the absolute path that was written.
pub fn write_values<T: Display>(path: &Path, values: &[T]) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create missing directory {parent:?}"))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {path:?}"))?;
    node::write_lines(BufWriter::new(file), values)
        .with_context(|| format!("Failed to write {path:?}"))?;
    debug!(?path, lines = values.len(), "wrote");
    Ok(fs::canonicalize(path)?)
}
