//! Thin file access used at the edges of a command.

use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Errors reading or writing an env file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  #[error("Failed to read {}: {}", .0.display(), .1)]
  Read(PathBuf, #[source] std::io::Error),
  #[error("Failed to write {}: {}", .0.display(), .1)]
  Write(PathBuf, #[source] std::io::Error),
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
  let path = path.as_ref();

  #[cfg(feature = "tracing")]
  debug!("Reading {:?}", path);

  std::fs::read_to_string(path).map_err(|e| FileError::Read(path.to_path_buf(), e))
}

/// Reads the file, or returns `None` if it is missing or unreadable.
pub fn try_read_file<P: AsRef<Path>>(path: P) -> Option<String> {
  match read_file(path) {
    Ok(content) => Some(content),
    Err(_e) => {
      #[cfg(feature = "tracing")]
      debug!("Could not read file: {}", _e);

      None
    }
  }
}

pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
  let path = path.as_ref();

  #[cfg(feature = "tracing")]
  debug!("Writing {} bytes to {:?}", content.len(), path);

  std::fs::write(path, content).map_err(|e| FileError::Write(path.to_path_buf(), e))
}
