use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur in the marker parser
#[derive(Debug)]
pub enum MarkerParserError {
    Document(DocumentError),
    NoMarkers(NoMarkersError),
    Other(io::Error),
}

/// The metadata document text is not well-formed XML
#[derive(Debug)]
pub struct DocumentError {
    pub message: String,
}

impl DocumentError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The document parsed but no extraction pass found any marker
#[derive(Debug)]
pub struct NoMarkersError {
    pub message: String,
}

impl NoMarkersError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MarkerParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerParserError::Document(err) => write!(f, "Document error: {}", err),
            MarkerParserError::NoMarkers(err) => write!(f, "No markers: {}", err),
            MarkerParserError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for NoMarkersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for MarkerParserError {}
impl Error for DocumentError {}
impl Error for NoMarkersError {}

// Conversion implementations
impl From<io::Error> for MarkerParserError {
    fn from(err: io::Error) -> Self {
        MarkerParserError::Other(err)
    }
}

impl From<DocumentError> for MarkerParserError {
    fn from(err: DocumentError) -> Self {
        MarkerParserError::Document(err)
    }
}

impl From<NoMarkersError> for MarkerParserError {
    fn from(err: NoMarkersError) -> Self {
        MarkerParserError::NoMarkers(err)
    }
}

// Conversion to io::Error for callers that only deal in io results
impl From<MarkerParserError> for io::Error {
    fn from(err: MarkerParserError) -> Self {
        io::Error::other(err)
    }
}

impl From<DocumentError> for io::Error {
    fn from(err: DocumentError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with MarkerParserError
pub type MarkerParserResult<T> = Result<T, MarkerParserError>;
