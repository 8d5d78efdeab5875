// src/file.rs

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::out_file_name;
use crate::error::{Result, ScrapeError};

/// Write one `jvms-<version>-prolog.pl` per entry into `dir`, overwriting
/// existing files. Returns the paths written, in version order.
pub fn write_specs(dir: &Path, specs: &BTreeMap<u32, String>) -> Result<Vec<PathBuf>> {
    if specs.is_empty() {
        return Ok(Vec::new());
    }
    ensure_directory(dir)?;

    let mut written = Vec::with_capacity(specs.len());
    for (version, spec) in specs {
        let path = dir.join(out_file_name(*version));
        write_spec(&path, spec)?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Whole-text write; truncates whatever was there.
pub fn write_spec(path: &Path, spec: &str) -> Result<()> {
    fs::write(path, spec).map_err(|source| ScrapeError::Write { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    let fail = |source| ScrapeError::Write { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(fail(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(fail)?; }
    Ok(())
}
