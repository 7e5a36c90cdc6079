//! Codec implementations for byte and text strings.
//!
//! Both are written as an unsigned length prefix of [`SizeConfig::string_length`] bytes
//! followed by the raw bytes. Text is UTF-8 encoded first and validated on the way back.

use crate::{util::at_least, EncodeSize, Error, Read, SizeConfig, Write};
use bytes::{Buf, BufMut, Bytes};

#[inline]
pub(crate) fn write_prefixed(
    value: &[u8],
    buf: &mut impl BufMut,
    cfg: &SizeConfig,
) -> Result<(), Error> {
    let width = cfg.string_length();
    let len = u64::try_from(value.len())
        .ok()
        .filter(|len| *len <= cfg.max_length())
        .ok_or(Error::LengthOverflow {
            len: value.len(),
            width,
        })?;
    buf.put_uint_ne(len, width);
    buf.put_slice(value);
    Ok(())
}

#[inline]
pub(crate) fn read_prefixed(buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Bytes, Error> {
    at_least(buf, cfg.string_length())?;
    let len = buf.get_uint_ne(cfg.string_length());
    let len = usize::try_from(len).map_err(|_| Error::InvalidLength(len))?;
    at_least(buf, len)?;
    Ok(buf.copy_to_bytes(len))
}

#[inline]
pub(crate) fn read_text(buf: &mut impl Buf, cfg: &SizeConfig) -> Result<String, Error> {
    let bytes = read_prefixed(buf, cfg)?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[inline]
pub(crate) fn prefixed_size(len: usize, cfg: &SizeConfig) -> usize {
    cfg.string_length() + len
}

impl Write for [u8] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        write_prefixed(self, buf, cfg)
    }
}

impl EncodeSize for [u8] {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        prefixed_size(self.len(), cfg)
    }
}

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        write_prefixed(self, buf, cfg)
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        prefixed_size(self.len(), cfg)
    }
}

impl Read for Bytes {
    #[inline]
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        read_prefixed(buf, cfg)
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        write_prefixed(self, buf, cfg)
    }
}

impl EncodeSize for Vec<u8> {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        prefixed_size(self.len(), cfg)
    }
}

impl Read for Vec<u8> {
    #[inline]
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        Ok(read_prefixed(buf, cfg)?.to_vec())
    }
}

impl Write for str {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        write_prefixed(self.as_bytes(), buf, cfg)
    }
}

impl EncodeSize for str {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        prefixed_size(self.len(), cfg)
    }
}

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        self.as_str().write(buf, cfg)
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        self.as_str().encode_size(cfg)
    }
}

impl Read for String {
    #[inline]
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        read_text(buf, cfg)
    }
}
