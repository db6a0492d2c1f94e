use std::path::PathBuf;

/// Errors that can occur while sending a finder chart request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed to build, send or read the request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A file selected for upload could not be read.
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        /// The path entered in the file input.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
