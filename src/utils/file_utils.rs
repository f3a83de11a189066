use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, trace};

use crate::error::{DatasetError, Result};

fn write_error(path: &Path, source: std::io::Error) -> DatasetError {
    DatasetError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
    }
    Ok(())
}

/// Write a string to a file, creating the parent directory if needed
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content).map_err(|e| write_error(path, e))
}

/// Write one item per line, truncating any existing file
///
/// A failure part way through leaves the lines written so far on disk.
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| write_error(path, e))?;
    }
    writer.flush().map_err(|e| write_error(path, e))?;

    trace!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
