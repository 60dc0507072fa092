use std::fmt;
use std::io;
use std::net;

use crate::net::buffer::BufferError;
use crate::net::shared::{ErrorType, NetworkError};

pub type AtemResult<T> = Result<T, AtemError>;

/// Caller-facing errors. Transport and decode failures are internal and
/// surface through warning/disconnect events instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtemError {
    /// A setter or exec was invoked without an established session.
    NotConnected,
    /// An enum argument was passed by name and the name is not a variant.
    UnknownName { what: &'static str, name: String },
    /// An enum argument was passed by code and the code is not assigned.
    UnknownCode { what: &'static str, code: i64 },
    /// A bundled sub-packet would push the datagram past the output limit.
    /// The bundle is left intact; drop the offending setter and finish.
    BundleOverflow,
    Buffer(BufferError),
    Io(io::ErrorKind),
    AddrParse,
    Config(String),
}

impl fmt::Display for AtemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtemError::NotConnected => write!(f, "switcher is not connected"),
            AtemError::UnknownName { what, name } => {
                write!(f, "{:?} is not a valid {} name", name, what)
            }
            AtemError::UnknownCode { what, code } => {
                write!(f, "{} is not a valid {} code", code, what)
            }
            AtemError::BundleOverflow => {
                write!(f, "bundle exceeds the output packet limit")
            }
            AtemError::Buffer(err) => write!(f, "{}", err),
            AtemError::Io(kind) => write!(f, "io error: {:?}", kind),
            AtemError::AddrParse => write!(f, "malformed switcher address"),
            AtemError::Config(msg) => write!(f, "bad connection config: {}", msg),
        }
    }
}

impl std::error::Error for AtemError {}

impl From<BufferError> for AtemError {
    #[inline]
    fn from(err: BufferError) -> Self {
        AtemError::Buffer(err)
    }
}

impl From<io::Error> for AtemError {
    #[inline]
    fn from(err: io::Error) -> Self {
        AtemError::Io(err.kind())
    }
}

impl From<net::AddrParseError> for AtemError {
    #[inline]
    fn from(_: net::AddrParseError) -> Self {
        AtemError::AddrParse
    }
}

impl From<NetworkError> for AtemError {
    #[inline]
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Wait => AtemError::Io(io::ErrorKind::WouldBlock),
            NetworkError::Fatal(ErrorType::Io(kind)) => AtemError::Io(kind),
            NetworkError::Fatal(ErrorType::AddrParse) => AtemError::AddrParse,
            NetworkError::Fatal(ErrorType::Closed) => AtemError::NotConnected,
        }
    }
}
