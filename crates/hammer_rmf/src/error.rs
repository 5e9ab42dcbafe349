//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// The stream ended before a record was complete
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(binrw::Error),

    /// a format signature did not match
    #[error("invalid signature, expected {expected:02X?} found {found:02X?}")]
    #[diagnostic(help(
        "documents must open with RMF version 2.2 and may only be followed by a DOCINFO block"
    ))]
    InvalidMagic {
        /// The signature that was required
        expected: &'static [u8],
        /// The bytes found where the signature was expected
        found: Vec<u8>,
    },

    /// a string field could not be decoded
    #[error("malformed string")]
    MalformedString(#[from] MalformedStringError),

    /// a string is too long for the slot it is written to
    #[error("string of {length} bytes does not fit in {max} bytes")]
    StringTooLong {
        /// Encoded length of the string, including its terminator
        length: usize,
        /// Number of bytes available for it
        max: usize,
    },

    /// unrecognised object type tag
    #[error("unknown object type {0:?}")]
    UnknownObjectType(String),

    /// the root object of a document is not a world
    #[error("root object must be CMapWorld, found {0}")]
    InvalidRoot(&'static str),

    /// an entity brush slot holds something other than a solid
    #[error("entity brushes must be CMapSolid, found {0}")]
    InvalidBrush(&'static str),

    /// a face does not describe a polygon
    #[error("face has {vertices} vertices, at least 3 are required")]
    DegenerateFace {
        /// Number of vertices found
        vertices: usize,
    },

    /// a signed element count was negative
    #[error("negative element count {0}")]
    NegativeCount(i32),

    /// too many elements to be counted by a signed 32 bit integer
    #[error("{0} elements can not be stored in a single record")]
    TooManyElements(usize),

    /// objects are nested deeper than the configured limit
    #[error("object nesting exceeds the limit of {0}")]
    #[diagnostic(help("raise DecodeOptions::max_depth if the document is trusted"))]
    MaxDepthExceeded(usize),
}

/// Error type to provide further information when a string can't be decoded
#[derive(Error, Diagnostic, Debug)]
pub enum MalformedStringError {
    /// no terminator in a fixed length field of {0} bytes
    #[error("no terminator in a fixed length field of {0} bytes")]
    Unterminated(usize),

    /// Transparent warpper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::IOError(err),
        }
    }
}

impl From<binrw::Error> for Error {
    fn from(err: binrw::Error) -> Self {
        if err.is_eof() {
            Error::UnexpectedEof
        } else {
            Error::BinRWError(err)
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
