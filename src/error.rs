use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Cannot open output {path}: {source}")]
    OutputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
impl DumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DumpError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DumpError::OutputUnavailable {
            path: path.into(),
            source,
        }
    }
}
