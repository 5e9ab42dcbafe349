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

    /// file is not a WAD3 archive
    #[error("invalid signature, expected {expected:02X?} found {found:02X?}")]
    #[diagnostic(help("only WAD3 archives are supported"))]
    InvalidMagic {
        /// The signature that was required
        expected: &'static [u8],
        /// The bytes found where the signature was expected
        found: Vec<u8>,
    },

    /// a lump name could not be decoded
    #[error("malformed lump name")]
    MalformedString(#[from] MalformedStringError),

    /// lump type code {0:#04X} can not be decoded
    #[error("lump type {0:#04X} can not be decoded here")]
    UnsupportedLumpType(u8),

    /// no lump with the requested name
    #[error("texture {0:?} not found")]
    #[diagnostic(code(hammer_wad::texture_not_found))]
    TextureNotFound(String),

    /// the pixel count of a lump does not fit in memory
    #[error("lump of {width}x{height} pixels is too large")]
    LumpTooLarge {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
}

/// Error type to provide further information when a name can't be decoded
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
