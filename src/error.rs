//! Error types for sheetdiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetDiffError>;

#[derive(Error, Debug)]
pub enum SheetDiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("Invalid cell address: {address}")]
    InvalidAddress { address: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl SheetDiffError {
    pub fn workbook(path: impl Into<PathBuf>, msg: impl ToString) -> Self {
        Self::Workbook {
            path: path.into(),
            message: msg.to_string(),
        }
    }

    pub fn invalid_address(address: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
