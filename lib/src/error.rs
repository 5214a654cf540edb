use std::error;
use std::fmt;
use std::io;

use reqwest::StatusCode;

/// Boxed underlying cause carried by the encoding and transport variants.
pub type Cause = Box<dyn error::Error + Send + Sync + 'static>;

/// All possible errors returned when building or sending a message
#[derive(Debug)]
pub enum Error {
    /// Message could not be converted to the wire format
    Encoding(Cause),
    /// Request never produced a response (connect, DNS, TLS, timeout)
    Transmission(Cause),
    /// Provider answered with anything other than 201 Created
    Rejected { status: StatusCode, reason: String },
    /// Attachment source could not be fully consumed
    Read(io::Error),
    /// Settings could not be loaded or the endpoint is not a valid URL
    Config(String),
}

impl Error {
    /// Transport failures and provider rejections may succeed on a later
    /// attempt. Encoding, read and config errors need the input fixed.
    pub fn is_retryable(&self) -> bool {
        match *self {
            Error::Transmission(_) | Error::Rejected { .. } => true,
            _ => false,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match *self {
            Error::Rejected { status, .. } => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Encoding(ref e) => write!(f, "failed to encode message: {}", e),
            Error::Transmission(ref e) => write!(f, "failed to transmit message: {}", e),
            Error::Rejected { status, ref reason } if reason.is_empty() => {
                write!(f, "send failed: {}", status.as_u16())
            }
            Error::Rejected { status, ref reason } => {
                write!(f, "send failed: {} {}", status.as_u16(), reason)
            }
            Error::Read(ref e) => write!(f, "failed to read attachment: {}", e),
            Error::Config(ref msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Encoding(ref e) | Error::Transmission(ref e) => Some(&**e),
            Error::Read(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.into())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::Encoding(err.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Read(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}
