//! File upload source.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

use super::RawTextSource;

/// Maximum size for an uploaded source file (10 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Check a file's size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read a UTF-8 text file, rejecting UTF-16 and stripping a UTF-8 BOM.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;

    // UTF-16 LE / BE BOM
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Reads raw text from an uploaded file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
    max_size: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        Self {
            path,
            name,
            max_size: MAX_SOURCE_FILE_SIZE,
        }
    }

    /// Override the size limit.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawTextSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String> {
        check_file_size_with_limit(&self.path, self.max_size)?;
        read_text_file(&self.path)
    }
}
