//! Export of sampled surfaces to file formats.

#[cfg(feature = "stl-io")]
pub mod stl;

/// Generic I/O errors raised by the exporters.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedPath(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
