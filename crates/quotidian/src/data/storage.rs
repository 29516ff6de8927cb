//! Storage layer for JSON persistence
//!
//! File I/O for the data module: path resolution into the platform config
//! directory and typed JSON read/write.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AppError::Storage(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

/// Get path to a specific data file in the default config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot create directory {:?}", path)
                }
                _ => format!("Failed to create directory {:?}: {}", path, e),
            };
            Err(AppError::Storage(msg))
        }
    }
}

/// Read file contents, mapping "not found" to `None`
fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            ErrorKind::PermissionDenied => Err(AppError::Storage(format!(
                "Permission denied: cannot read {:?}",
                path
            ))),
            _ => Err(AppError::Storage(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        },
    }
}

/// Write file contents with proper error handling
fn write_file(path: &Path, content: &str) -> Result<()> {
    match fs::write(path, content) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {:?}", path)
                }
                ErrorKind::ReadOnlyFilesystem => {
                    format!("Cannot write to {:?}: filesystem is read-only", path)
                }
                _ => format!("Failed to write to {:?}: {}", path, e),
            };
            Err(AppError::Storage(msg))
        }
    }
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match read_file(path)? {
        Some(c) => c,
        None => return Ok(None),
    };

    // Empty file is treated as non-existent
    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("Failed to parse {:?}: {}", path, e)))?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path
///
/// Creates parent directories if they don't exist.
pub fn save_to<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_if_needed(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Storage(format!("Failed to serialize data: {}", e)))?;

    write_file(path, &content)
}
