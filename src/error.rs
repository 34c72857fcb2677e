use std::error::Error;
use std::fmt;

/// Failure to turn a JSON record back into a moving average
#[derive(Debug)]
pub struct DecodeError {
    source: serde_json::Error,
}

impl DecodeError {
    /// Line of the input where decoding failed, starting at 1
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// Column of the input where decoding failed, starting at 1
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        DecodeError { source }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid moving average record: {}", self.source)
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Failure to write a moving average as a JSON record
#[derive(Debug)]
pub struct EncodeError {
    source: serde_json::Error,
}

impl From<serde_json::Error> for EncodeError {
    fn from(source: serde_json::Error) -> Self {
        EncodeError { source }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Could not encode moving average: {}", self.source)
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
