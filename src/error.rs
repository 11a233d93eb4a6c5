//! Error type shared by the library modules

use std::path::PathBuf;

/// Result type for textsearch operations
pub type Result<T> = std::result::Result<T, TextSearchError>;

/// Errors that can occur while building indexes or aligning sequences
#[derive(Debug)]
pub enum TextSearchError {
    /// Caller supplied an argument the operation cannot accept
    InvalidInput(String),
    /// Reading a config or input file failed
    Io(std::io::Error),
    /// Config file could not be parsed
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl TextSearchError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        TextSearchError::InvalidInput(message.into())
    }
}

impl std::fmt::Display for TextSearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSearchError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TextSearchError::Io(e) => write!(f, "I/O error: {}", e),
            TextSearchError::Config { path, source } => {
                write!(f, "Invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TextSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextSearchError::InvalidInput(_) => None,
            TextSearchError::Io(e) => Some(e),
            TextSearchError::Config { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for TextSearchError {
    fn from(e: std::io::Error) -> Self {
        TextSearchError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = TextSearchError::invalid_input("sequence is empty");
        assert_eq!(err.to_string(), "Invalid input: sequence is empty");
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error;

        let err: TextSearchError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
