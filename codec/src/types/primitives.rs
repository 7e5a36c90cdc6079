//! Codec implementations for native integers, booleans and floats.
//!
//! * Integers are always written in the 4-byte [`Int`] layout, whatever the [`SizeConfig`]
//!   says. No range check is performed: a value wider than 4 bytes is truncated, and decoding
//!   sign-extends.
//!
//! The remaining categories take their width from the [`SizeConfig`]:
//! * Booleans are written as a `boolean`-byte unsigned `1` or `0`. Any nonzero value decodes
//!   to `true`.
//! * Floats are written as IEEE single precision if `float` is 4, double precision if 8.
//!
//! All values use the native byte order.

use crate::{types::bounded::Int, util::at_least, EncodeSize, Error, Read, SizeConfig, Write};
use bytes::{Buf, BufMut};

const SINGLE_PRECISION: usize = 4;

#[inline]
pub(crate) fn write_integer(value: i64, buf: &mut impl BufMut) {
    buf.put_int_ne(value, Int::WIDTH);
}

#[inline]
pub(crate) fn read_integer(buf: &mut impl Buf) -> Result<i64, Error> {
    at_least(buf, Int::WIDTH)?;
    Ok(buf.get_int_ne(Int::WIDTH))
}

#[inline]
pub(crate) fn write_boolean(value: bool, buf: &mut impl BufMut, cfg: &SizeConfig) {
    buf.put_uint_ne(u64::from(value), cfg.boolean());
}

#[inline]
pub(crate) fn read_boolean(buf: &mut impl Buf, cfg: &SizeConfig) -> Result<bool, Error> {
    at_least(buf, cfg.boolean())?;
    Ok(buf.get_uint_ne(cfg.boolean()) != 0)
}

#[inline]
pub(crate) fn write_float(value: f64, buf: &mut impl BufMut, cfg: &SizeConfig) {
    if cfg.float() == SINGLE_PRECISION {
        buf.put_f32_ne(value as f32);
    } else {
        buf.put_f64_ne(value);
    }
}

#[inline]
pub(crate) fn read_float(buf: &mut impl Buf, cfg: &SizeConfig) -> Result<f64, Error> {
    at_least(buf, cfg.float())?;
    if cfg.float() == SINGLE_PRECISION {
        Ok(buf.get_f32_ne() as f64)
    } else {
        Ok(buf.get_f64_ne())
    }
}

macro_rules! impl_integer {
    ($type:ty) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, _: &SizeConfig) -> Result<(), Error> {
                write_integer(*self as i64, buf);
                Ok(())
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self, _: &SizeConfig) -> usize {
                Int::WIDTH
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(&self, buf: &mut impl Buf, _: &SizeConfig) -> Result<Self, Error> {
                Ok(read_integer(buf)? as $type)
            }
        }
    };
}

impl_integer!(i32);
impl_integer!(i64);

macro_rules! impl_float {
    ($type:ty) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
                write_float(*self as f64, buf, cfg);
                Ok(())
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self, cfg: &SizeConfig) -> usize {
                cfg.float()
            }
        }

        impl Read for $type {
            #[inline]
            fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
                Ok(read_float(buf, cfg)? as $type)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        write_boolean(*self, buf, cfg);
        Ok(())
    }
}

impl EncodeSize for bool {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        cfg.boolean()
    }
}

impl Read for bool {
    #[inline]
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        read_boolean(buf, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pack, unpack, Encode, X86};
    use paste::paste;

    macro_rules! impl_int_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let values: [$type; 5] = [0, 1, -1, 42, -42];
                    for width in [1, 2, 4, 8] {
                        // The configured integer width never changes the layout
                        let cfg = X86.with_integer(width).unwrap();
                        for value in values {
                            let encoded = value.encode_cfg(&cfg).unwrap();
                            assert_eq!(encoded, &(value as i32).to_ne_bytes()[..]);
                            assert_eq!(value.encode_size(&cfg), Int::WIDTH);
                            let decoded = unpack(&encoded, &<$type>::default(), &cfg).unwrap();
                            assert_eq!(value, decoded);
                        }
                    }
                }
            }
        };
    }
    impl_int_test!(i32);
    impl_int_test!(i64);

    #[test]
    fn test_integer_int_layout() {
        let encoded = pack(&5i64, &X86).unwrap();
        assert_eq!(encoded, &5i32.to_ne_bytes()[..]);
        let encoded = pack(&-2i32, &X86).unwrap();
        assert_eq!(encoded, &(-2i32).to_ne_bytes()[..]);

        // Same bytes as the bounded Int kind
        let wide = X86.with_integer(8).unwrap();
        let encoded = pack(&5i32, &wide).unwrap();
        assert_eq!(encoded.len(), 4);
        assert_eq!(encoded, &Int::from(5).encode()[..]);
        assert_eq!(unpack(&encoded, &Int::default(), &wide).unwrap().get(), 5);
    }

    #[test]
    fn test_integer_truncated() {
        // Native integers are not range checked
        let value = (1i64 << 32) + 7;
        let encoded = pack(&value, &X86).unwrap();
        assert_eq!(encoded.len(), 4);
        assert_eq!(unpack(&encoded, &0i64, &X86).unwrap(), 7);

        let encoded = pack(&i64::MIN, &X86.with_integer(8).unwrap()).unwrap();
        assert_eq!(encoded, &0i32.to_ne_bytes()[..]);
        let encoded = pack(&(i32::MIN as i64), &X86).unwrap();
        assert_eq!(unpack(&encoded, &0i64, &X86).unwrap(), i32::MIN as i64);
    }

    #[test]
    fn test_bool() {
        for width in 1..=8 {
            let cfg = X86.with_boolean(width).unwrap();
            for value in [true, false] {
                let encoded = pack(&value, &cfg).unwrap();
                assert_eq!(encoded.len(), width);
                assert_eq!(unpack(&encoded, &false, &cfg).unwrap(), value);
            }
        }
        assert_eq!(pack(&true, &X86).unwrap(), &[0x01][..]);
        assert_eq!(pack(&false, &X86).unwrap(), &[0x00][..]);
    }

    #[test]
    fn test_bool_nonzero() {
        assert!(unpack(&[0x02], &false, &X86).unwrap());
        assert!(unpack(&[0xFF], &false, &X86).unwrap());
    }

    #[test]
    fn test_float() {
        let single = X86;
        let double = X86.with_float(8).unwrap();

        let encoded = pack(&2.5f64, &single).unwrap();
        assert_eq!(encoded, &2.5f32.to_ne_bytes()[..]);
        assert_eq!(unpack(&encoded, &0f64, &single).unwrap(), 2.5);

        let encoded = pack(&0.1f64, &double).unwrap();
        assert_eq!(encoded, &0.1f64.to_ne_bytes()[..]);
        assert_eq!(unpack(&encoded, &0f64, &double).unwrap(), 0.1);

        let encoded = pack(&-1.5f32, &double).unwrap();
        assert_eq!(encoded.len(), 8);
        assert_eq!(unpack(&encoded, &0f32, &double).unwrap(), -1.5);

        for value in [f32::INFINITY, f32::NEG_INFINITY, f32::MAX, f32::MIN] {
            let encoded = pack(&value, &single).unwrap();
            assert_eq!(unpack(&encoded, &0f32, &single).unwrap(), value);
        }
        let encoded = pack(&f32::NAN, &single).unwrap();
        assert!(unpack(&encoded, &0f32, &single).unwrap().is_nan());
    }

    #[test]
    fn test_short_buffer() {
        let cfg = X86.with_integer(8).unwrap().with_float(8).unwrap();
        assert_eq!(unpack(&[0; 3], &0i64, &cfg), Err(Error::EndOfBuffer));
        assert_eq!(unpack(&[0; 7], &0f64, &cfg), Err(Error::EndOfBuffer));
        assert_eq!(unpack(&[], &false, &cfg), Err(Error::EndOfBuffer));
    }
}
