use std::path::PathBuf;

/// Errors that can occur while loading, resolving or writing tour data.
#[derive(Debug, thiserror::Error)]
pub enum TourError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be turned into a tour graph.
    #[error("Format error in {source_name}: {message}")]
    Format {
        source_name: String,
        message: String,
    },

    /// A file the pipeline depends on does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to serialize an output document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TourError {
    /// Shorthand for a [`TourError::Format`] raised while reading `source_name`.
    pub fn format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        TourError::Format {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
