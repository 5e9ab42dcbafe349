//! Primitive encodings used throughout the RMF format.
//!
//! All integers and floats are little endian. Strings come in two flavours:
//!
//! - **fixed**: a slot of `N` bytes holding the text followed by a zero byte and
//!   arbitrary padding. Only the text up to the first zero is meaningful.
//! - **prefixed**: one length byte `n`, then `n` bytes of which the last is a zero
//!   terminator.

use binrw::{BinRead, BinReaderExt, BinWrite, BinWriterExt};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Seek, Write};

use crate::error::{Error, MalformedStringError, Result};

/// Longest text a prefixed string can hold, one byte is taken by the terminator
pub const MAX_PREFIXED_LENGTH: usize = u8::MAX as usize - 1;

/// Reading primitives from an RMF stream
pub trait ReadRmfExt: Read + Seek + Sized {
    /// Read exactly `length` bytes and keep the text before the first zero byte
    fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        let mut buffer = vec![0u8; length];
        self.read_exact(&mut buffer)?;

        let end = buffer
            .iter()
            .position(|&c| c == b'\0')
            .ok_or(MalformedStringError::Unterminated(length))?;
        buffer.truncate(end);

        Ok(String::from_utf8(buffer).map_err(MalformedStringError::from)?)
    }

    /// Read a length byte and that many bytes, dropping the trailing terminator
    fn read_prefixed_string(&mut self) -> Result<String> {
        let length = self.read_u8()? as usize;
        let mut buffer = vec![0u8; length];
        self.read_exact(&mut buffer)?;
        buffer.pop();

        Ok(String::from_utf8(buffer).map_err(MalformedStringError::from)?)
    }

    /// Read a signed 32 bit element count
    fn read_count(&mut self) -> Result<usize> {
        let count = self.read_i32::<LittleEndian>()?;
        usize::try_from(count).map_err(|_| Error::NegativeCount(count))
    }

    /// Read a range of bytes that is kept verbatim
    fn read_opaque<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buffer = [0u8; N];
        self.read_exact(&mut buffer)?;
        Ok(buffer)
    }

    /// Read a little endian record
    fn read_record<T>(&mut self) -> Result<T>
    where
        T: for<'a> BinRead<Args<'a> = ()>,
    {
        Ok(self.read_le::<T>()?)
    }
}

impl<R: Read + Seek> ReadRmfExt for R {}

/// Writing primitives to an RMF stream
pub trait WriteRmfExt: Write + Seek + Sized {
    /// Write `text` into a zero padded slot of `length` bytes
    ///
    /// The slot must have room for the terminator.
    fn write_fixed_string(&mut self, length: usize, text: &str) -> Result<()> {
        let bytes = text.as_bytes();
        if bytes.len() >= length {
            return Err(Error::StringTooLong {
                length: bytes.len() + 1,
                max: length,
            });
        }

        let mut buffer = vec![0u8; length];
        buffer[..bytes.len()].copy_from_slice(bytes);
        self.write_all(&buffer)?;

        Ok(())
    }

    /// Write a length byte, `text` and a terminator
    fn write_prefixed_string(&mut self, text: &str) -> Result<()> {
        let bytes = text.as_bytes();
        if bytes.len() > MAX_PREFIXED_LENGTH {
            return Err(Error::StringTooLong {
                length: bytes.len() + 1,
                max: u8::MAX as usize,
            });
        }

        self.write_u8(bytes.len() as u8 + 1)?;
        self.write_all(bytes)?;
        self.write_u8(0)?;

        Ok(())
    }

    /// Write a signed 32 bit element count
    fn write_count(&mut self, count: usize) -> Result<()> {
        let count = i32::try_from(count).map_err(|_| Error::TooManyElements(count))?;
        self.write_i32::<LittleEndian>(count)?;
        Ok(())
    }

    /// Write a range of bytes that was kept verbatim
    fn write_opaque(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes)?;
        Ok(())
    }

    /// Write a little endian record
    fn write_record<T>(&mut self, value: &T) -> Result<()>
    where
        T: for<'a> BinWrite<Args<'a> = ()>,
    {
        Ok(self.write_le(value)?)
    }
}

impl<W: Write + Seek> WriteRmfExt for W {}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::codec::{ReadRmfExt, WriteRmfExt};
    use crate::error::{Error, MalformedStringError, Result};
    use crate::types::Vector3;

    #[test]
    fn fixed_string_stops_at_terminator() -> Result<()> {
        let mut input = vec![0xAAu8; 128];
        input[..4].copy_from_slice(b"foo\0");
        let mut input = Cursor::new(input);

        assert_eq!(input.read_fixed_string(128)?, "foo");
        assert_eq!(input.position(), 128);

        Ok(())
    }

    #[test]
    fn fixed_string_without_terminator() {
        let mut input = Cursor::new(b"abcd".to_vec());

        assert!(matches!(
            input.read_fixed_string(4),
            Err(Error::MalformedString(MalformedStringError::Unterminated(4)))
        ));
    }

    #[test]
    fn fixed_string_invalid_utf8() {
        let mut input = Cursor::new(vec![0xFF, 0xFE, 0x00, 0x00]);

        assert!(matches!(
            input.read_fixed_string(4),
            Err(Error::MalformedString(MalformedStringError::InvalidUtf8(_)))
        ));
    }

    #[test]
    fn fixed_string_short_read() {
        let mut input = Cursor::new(b"ab\0".to_vec());

        assert!(matches!(
            input.read_fixed_string(16),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn prefixed_string() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x0A, b'C', b'M', b'a', b'p', b'S', b'o', b'l', b'i', b'd', 0x00,
            0x00,
        ]);

        assert_eq!(input.read_prefixed_string()?, "CMapSolid");
        assert_eq!(input.read_prefixed_string()?, "");

        Ok(())
    }

    #[test]
    fn write_fixed_string() -> Result<()> {
        let mut actual = Cursor::new(Vec::new());
        actual.write_fixed_string(8, "abc")?;

        assert_eq!(actual.into_inner(), b"abc\0\0\0\0\0".to_vec());

        Ok(())
    }

    #[test]
    fn write_fixed_string_needs_terminator() {
        let mut actual = Cursor::new(Vec::new());

        assert!(matches!(
            actual.write_fixed_string(4, "abcd"),
            Err(Error::StringTooLong { length: 5, max: 4 })
        ));
        assert!(actual.into_inner().is_empty());
    }

    #[test]
    fn write_prefixed_string() -> Result<()> {
        let mut actual = Cursor::new(Vec::new());
        actual.write_prefixed_string("CMapGroup")?;

        assert_eq!(actual.into_inner(), b"\x0ACMapGroup\0".to_vec());

        Ok(())
    }

    #[test]
    fn write_prefixed_string_too_long() {
        let text = "x".repeat(255);
        let mut actual = Cursor::new(Vec::new());

        assert!(matches!(
            actual.write_prefixed_string(&text),
            Err(Error::StringTooLong {
                length: 256,
                max: 255
            })
        ));
    }

    #[test]
    fn longest_prefixed_string() -> Result<()> {
        let text = "x".repeat(254);
        let mut buffer = Cursor::new(Vec::new());
        buffer.write_prefixed_string(&text)?;
        buffer.set_position(0);

        assert_eq!(buffer.get_ref()[0], 0xFF);
        assert_eq!(buffer.read_prefixed_string()?, text);

        Ok(())
    }

    #[test]
    fn negative_count() {
        let mut input = Cursor::new(vec![0xFF, 0xFF, 0xFF, 0xFF]);

        assert!(matches!(input.read_count(), Err(Error::NegativeCount(-1))));
    }

    #[test]
    fn short_record() {
        let mut input = Cursor::new(vec![0x00, 0x00, 0x80, 0x3F]);

        assert!(matches!(
            input.read_record::<Vector3>(),
            Err(Error::UnexpectedEof)
        ));
    }
}
