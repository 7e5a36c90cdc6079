//! Core codec traits and the top-level pack/unpack entry points

use crate::{Error, SizeConfig};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

/// Trait for types that can be written (packed) to a buffer.
pub trait Write {
    /// Packs this value by writing to a buffer, using the widths in `cfg`.
    ///
    /// Returns an error for categories that cannot be packed (sets, mappings) or for values
    /// the configured widths cannot represent (e.g. a string longer than its length prefix).
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error>;
}

/// Trait for types that know how many bytes [`Write::write`] produces.
pub trait EncodeSize {
    /// Returns the packed length of this value under `cfg`.
    ///
    /// This method MUST return the exact number of bytes that a successful `write()` produces.
    fn encode_size(&self, cfg: &SizeConfig) -> usize;
}

/// Trait for types that can be read from a buffer, guided by a template.
///
/// The wire format carries no type tags, so decoding needs the shape up front. The receiver
/// (`self`) is that shape: its contents are ignored, but nested templates (tuple elements,
/// composite fields, dynamic values) pick the layout of each part.
pub trait Read: Sized {
    /// Reads a value shaped like `self`, consuming exactly the bytes that packing such a value
    /// would have produced.
    ///
    /// Fails with [`Error::EndOfBuffer`] if the buffer is too short.
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error>;
}

/// Trait for types with a packed length that does not depend on the [`SizeConfig`].
pub trait FixedSize {
    /// The packed length.
    const SIZE: usize;
}

/// Trait for types that can be packed into a freshly allocated buffer.
pub trait Encode: Write + EncodeSize {
    /// Packs a value into a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode_cfg(&self, cfg: &SizeConfig) -> Result<BytesMut, Error> {
        let len = self.encode_size(cfg);
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer, cfg)?;
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        Ok(buffer)
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize + ?Sized> Encode for T {}

// References pack like the value they point to, so tuples can borrow their elements.
impl<T: Write + ?Sized> Write for &T {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        (**self).write(buf, cfg)
    }
}

impl<T: EncodeSize + ?Sized> EncodeSize for &T {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        (**self).encode_size(cfg)
    }
}

/// Packs `value` into a new buffer.
///
/// Several values are packed together by passing a tuple: elements are concatenated in order
/// with no count or separator.
pub fn pack<T: Encode + ?Sized>(value: &T, cfg: &SizeConfig) -> Result<Bytes, Error> {
    let packed = value
        .encode_cfg(cfg)
        .inspect_err(|err| debug!(?err, "pack failed"))?
        .freeze();
    trace!(len = packed.len(), "packed");
    Ok(packed)
}

/// Decodes one value shaped like `template` from the front of `buf`, returning the value and
/// the unconsumed remainder.
pub fn decode_one<'a, T: Read>(
    mut buf: &'a [u8],
    template: &T,
    cfg: &SizeConfig,
) -> Result<(T, &'a [u8]), Error> {
    let value = template.read_cfg(&mut buf, cfg)?;
    Ok((value, buf))
}

/// Unpacks a value shaped like `template`, discarding any trailing bytes.
///
/// Use a tuple template to unpack several values packed together.
pub fn unpack<T: Read>(buf: &[u8], template: &T, cfg: &SizeConfig) -> Result<T, Error> {
    let (value, rest) =
        decode_one(buf, template, cfg).inspect_err(|err| debug!(?err, "unpack failed"))?;
    trace!(
        consumed = buf.len() - rest.len(),
        remaining = rest.len(),
        "unpacked"
    );
    Ok(value)
}

/// Unpacks a value shaped like `template`, ensuring the buffer is fully consumed.
pub fn unpack_exact<T: Read>(buf: &[u8], template: &T, cfg: &SizeConfig) -> Result<T, Error> {
    let (value, rest) = decode_one(buf, template, cfg)?;
    if !rest.is_empty() {
        debug!(remaining = rest.len(), "unpack left extra data");
        return Err(Error::ExtraData(rest.len()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::bounded::{Int, UnsignedShort};

    #[test]
    fn test_insufficient_buffer() {
        let cfg = SizeConfig::default();
        let buf = [0x01, 0x02];
        assert_eq!(unpack(&buf, &0i32, &cfg), Err(Error::EndOfBuffer));
    }

    #[test]
    fn test_decode_one_remainder() {
        let cfg = SizeConfig::default();
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05];
        let (value, rest) = decode_one(&buf, &UnsignedShort::default(), &cfg).unwrap();
        assert_eq!(value.get(), u16::from_ne_bytes([0x01, 0x02]));
        assert_eq!(rest, &[0x03, 0x04, 0x05]);
    }

    #[test]
    fn test_unpack_discards_remainder() {
        let cfg = SizeConfig::default();
        let packed = pack(&(Int::from(7), Int::from(8)), &cfg).unwrap();
        assert_eq!(unpack(&packed, &Int::default(), &cfg).unwrap().get(), 7);
    }

    #[test]
    fn test_unpack_exact() {
        let cfg = SizeConfig::default();
        let packed = pack(&(Int::from(7), true), &cfg).unwrap();
        assert_eq!(
            unpack_exact(&packed, &Int::default(), &cfg),
            Err(Error::ExtraData(1))
        );
        let (int, flag) = unpack_exact(&packed, &(Int::default(), false), &cfg).unwrap();
        assert_eq!(int.get(), 7);
        assert!(flag);
    }

    #[test]
    fn test_pack_reference() {
        let cfg = SizeConfig::default();
        let value = Int::from(-3);
        assert_eq!(pack(&&value, &cfg).unwrap(), pack(&value, &cfg).unwrap());
    }
}
