//! Message assembly: stdin, single files and concatenations of files.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read all of stdin as one message.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut message = Vec::new();
    io::stdin().lock().read_to_end(&mut message).context("failed to read stdin")?;
    Ok(message)
}

/// Read a single file as one message.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    append_file(&mut message, path)?;
    Ok(message)
}

/// Read ``files`` in order and concatenate their contents into one message.
pub fn read_concatenated(files: &[PathBuf]) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    for file in files {
        append_file(&mut message, file)?;
    }

    log::debug!("concatenated {} files into {} bytes", files.len(), message.len());

    Ok(message)
}

fn append_file(message: &mut Vec<u8>, path: &Path) -> Result<()> {
    let mut file = File::open(path).with_context(|| format!("{}: failed to open", path.display()))?;
    file.read_to_end(message).with_context(|| format!("{}: failed to read", path.display()))?;
    Ok(())
}
