//! Errors reported by the file layer.
//!
//! The line transformations themselves cannot fail; everything here comes from resolving
//! encodings, decoding or encoding file contents, file I/O and configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WrapError {
    /// Input bytes are not valid in the declared input encoding
    #[error("ERROR: [{}] IS NOT IN [{}]!", .path.display(), .encoding)]
    EncodingMismatch { path: PathBuf, encoding: String },

    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// The label resolves, but output in it is not supported (UTF-16)
    #[error("encoding '{0}' cannot be used for output")]
    UnsupportedOutputEncoding(String),

    /// The transformed text has characters the output encoding cannot represent
    #[error("ERROR: output for [{}] cannot be written in [{}]!", .path.display(), .encoding)]
    Unencodable { path: PathBuf, encoding: String },

    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize token view: {0}")]
    Json(#[from] serde_json::Error),
}

impl WrapError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WrapError::Io {
            path: path.into(),
            source,
        }
    }
}
