use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a markdown document into a line-addressable buffer
pub fn load_buffer(path: &Path) -> Result<TextBuffer, IoError> {
    let content = read_document(path)?;
    Ok(TextBuffer::from(content.as_str()))
}
