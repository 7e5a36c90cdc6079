//! Bounded, fixed-width value kinds.
//!
//! Each kind wraps a single scalar with a declared inclusive range and a fixed packed width
//! that does not depend on the [`SizeConfig`]. Construction validates the range and fails with
//! [`Error::OutOfRange`] rather than clamping, so an instance is always in range.
//!
//! | Kind | Width | Range |
//! |---|---|---|
//! | [`Char`] | 1 | a single ASCII character |
//! | [`UnsignedChar`] | 1 | `[0, 255]` |
//! | [`SignedChar`] | 1 | `[-128, 127]` |
//! | [`Short`] | 2 | `[-32768, 32767]` |
//! | [`UnsignedShort`] | 2 | `[0, 65535]` |
//! | [`Int`] | 4 | `[-2^31, 2^31-1]` |
//! | [`UnsignedInt`] | 4 | `[0, 2^32-1]` |
//! | [`Long`] | 4 | `[-2^31, 2^31-1]` |
//! | [`UnsignedLong`] | 4 | `[0, 2^32-1]` |
//! | [`LongLong`] | 8 | `[-2^63, 2^63-1]` |
//! | [`UnsignedLongLong`] | 8 | `[0, 2^64-1]` |
//! | [`Float`] | 4 | IEEE single |
//! | [`Double`] | 8 | IEEE double |
//!
//! [`Long`] and [`UnsignedLong`] are 4 bytes wide regardless of the target's `long`.
//!
//! All kinds use the native byte order. `encode()` returns exactly `WIDTH` bytes and
//! `decode()` consumes exactly `WIDTH` bytes from the front of a buffer.
//!
//! # Example
//!
//! ```
//! use parcel_codec::{types::bounded::UnsignedShort, Error};
//!
//! assert!(matches!(UnsignedShort::new(65536), Err(Error::OutOfRange { .. })));
//!
//! let value = UnsignedShort::new(65535).unwrap();
//! let encoded = value.encode();
//! let (decoded, rest) = UnsignedShort::decode(&encoded).unwrap();
//! assert_eq!(decoded, value);
//! assert!(rest.is_empty());
//! ```

use crate::{util::at_least, EncodeSize, Error, FixedSize, Read, SizeConfig, Write};
use bytes::{Buf, BufMut};

// Implements the shared codec plumbing for a kind whose inherent `encode`/`decode` exist.
macro_rules! impl_bounded_codec {
    ($name:ident, $width:literal) => {
        impl FixedSize for $name {
            const SIZE: usize = $width;
        }

        impl Write for $name {
            #[inline]
            fn write(&self, buf: &mut impl BufMut, _: &SizeConfig) -> Result<(), Error> {
                buf.put_slice(&self.encode());
                Ok(())
            }
        }

        impl EncodeSize for $name {
            #[inline]
            fn encode_size(&self, _: &SizeConfig) -> usize {
                Self::SIZE
            }
        }

        impl Read for $name {
            #[inline]
            fn read_cfg(&self, buf: &mut impl Buf, _: &SizeConfig) -> Result<Self, Error> {
                Self::read_raw(buf)
            }
        }

        impl $name {
            /// Number of bytes in the packed form.
            pub const WIDTH: usize = $width;

            /// Returns the packed form: exactly `WIDTH` bytes in native byte order.
            #[inline]
            pub fn encode(&self) -> [u8; $width] {
                self.to_raw()
            }

            /// Decodes a value from the front of `buf`, returning it with the remaining bytes.
            pub fn decode(buf: &[u8]) -> Result<(Self, &[u8]), Error> {
                let mut rest = buf;
                let value = Self::read_raw(&mut rest)?;
                Ok((value, rest))
            }

            #[inline]
            fn read_raw(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, $width)?;
                let mut raw = [0u8; $width];
                buf.copy_to_slice(&mut raw);
                Self::from_raw(raw)
            }
        }
    };
}

macro_rules! impl_bounded_int {
    ($(#[$doc:meta])* $name:ident, $type:ty, $width:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($type);

        impl $name {
            pub const NAME: &'static str = stringify!($name);
            pub const MIN: i128 = <$type>::MIN as i128;
            pub const MAX: i128 = <$type>::MAX as i128;

            /// Creates a value, failing with [`Error::OutOfRange`] outside `[MIN, MAX]`.
            pub fn new(value: impl Into<i128>) -> Result<Self, Error> {
                let value = value.into();
                if !(Self::MIN..=Self::MAX).contains(&value) {
                    return Err(Error::OutOfRange {
                        kind: Self::NAME,
                        value,
                        min: Self::MIN,
                        max: Self::MAX,
                    });
                }
                Ok(Self(value as $type))
            }

            #[inline]
            pub const fn get(self) -> $type {
                self.0
            }

            #[inline]
            fn to_raw(self) -> [u8; $width] {
                self.0.to_ne_bytes()
            }

            #[inline]
            fn from_raw(raw: [u8; $width]) -> Result<Self, Error> {
                Ok(Self(<$type>::from_ne_bytes(raw)))
            }
        }

        impl From<$type> for $name {
            fn from(value: $type) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $type {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl_bounded_codec!($name, $width);
    };
}

macro_rules! impl_bounded_float {
    ($(#[$doc:meta])* $name:ident, $type:ty, $width:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        pub struct $name($type);

        impl $name {
            pub const NAME: &'static str = stringify!($name);

            /// Creates a value. Every float (including NaN and the infinities) is in range.
            #[inline]
            pub const fn new(value: $type) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn get(self) -> $type {
                self.0
            }

            #[inline]
            fn to_raw(self) -> [u8; $width] {
                self.0.to_ne_bytes()
            }

            #[inline]
            fn from_raw(raw: [u8; $width]) -> Result<Self, Error> {
                Ok(Self(<$type>::from_ne_bytes(raw)))
            }
        }

        impl From<$type> for $name {
            fn from(value: $type) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $type {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl_bounded_codec!($name, $width);
    };
}

impl_bounded_int!(
    /// An unsigned 8-bit integer.
    UnsignedChar, u8, 1
);
impl_bounded_int!(
    /// A signed 8-bit integer.
    SignedChar, i8, 1
);
impl_bounded_int!(
    /// A signed 16-bit integer.
    Short, i16, 2
);
impl_bounded_int!(
    /// An unsigned 16-bit integer.
    UnsignedShort, u16, 2
);
impl_bounded_int!(
    /// A signed 32-bit integer.
    Int, i32, 4
);
impl_bounded_int!(
    /// An unsigned 32-bit integer.
    UnsignedInt, u32, 4
);
impl_bounded_int!(
    /// A signed 32-bit integer. Same width and range as [`Int`].
    Long, i32, 4
);
impl_bounded_int!(
    /// An unsigned 32-bit integer. Same width and range as [`UnsignedInt`].
    UnsignedLong, u32, 4
);
impl_bounded_int!(
    /// A signed 64-bit integer.
    LongLong, i64, 8
);
impl_bounded_int!(
    /// An unsigned 64-bit integer.
    UnsignedLongLong, u64, 8
);
impl_bounded_float!(
    /// An IEEE single-precision float.
    Float, f32, 4
);
impl_bounded_float!(
    /// An IEEE double-precision float.
    Double, f64, 8
);

/// A single ASCII character, packed as one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Char(u8);

impl Default for Char {
    fn default() -> Self {
        Self(b'\0')
    }
}

impl Char {
    pub const NAME: &'static str = "Char";

    /// Creates a character, failing with [`Error::OutOfRange`] if `c` is not ASCII.
    pub fn new(c: char) -> Result<Self, Error> {
        if !c.is_ascii() {
            return Err(Error::OutOfRange {
                kind: Self::NAME,
                value: u32::from(c) as i128,
                min: 0,
                max: 0x7F,
            });
        }
        Ok(Self(c as u8))
    }

    #[inline]
    pub const fn get(self) -> char {
        self.0 as char
    }

    #[inline]
    fn to_raw(self) -> [u8; 1] {
        [self.0]
    }

    #[inline]
    fn from_raw([byte]: [u8; 1]) -> Result<Self, Error> {
        if !byte.is_ascii() {
            return Err(Error::InvalidChar(u32::from(byte)));
        }
        Ok(Self(byte))
    }
}

impl TryFrom<char> for Char {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Char> for char {
    fn from(value: Char) -> Self {
        value.get()
    }
}

impl_bounded_codec!(Char, 1);

/// Any bounded kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundedValue {
    Char(Char),
    UnsignedChar(UnsignedChar),
    SignedChar(SignedChar),
    Short(Short),
    UnsignedShort(UnsignedShort),
    Int(Int),
    UnsignedInt(UnsignedInt),
    Long(Long),
    UnsignedLong(UnsignedLong),
    LongLong(LongLong),
    UnsignedLongLong(UnsignedLongLong),
    Float(Float),
    Double(Double),
}

// Forwards to whichever kind a `BoundedValue` holds.
macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            BoundedValue::Char($inner) => $body,
            BoundedValue::UnsignedChar($inner) => $body,
            BoundedValue::SignedChar($inner) => $body,
            BoundedValue::Short($inner) => $body,
            BoundedValue::UnsignedShort($inner) => $body,
            BoundedValue::Int($inner) => $body,
            BoundedValue::UnsignedInt($inner) => $body,
            BoundedValue::Long($inner) => $body,
            BoundedValue::UnsignedLong($inner) => $body,
            BoundedValue::LongLong($inner) => $body,
            BoundedValue::UnsignedLongLong($inner) => $body,
            BoundedValue::Float($inner) => $body,
            BoundedValue::Double($inner) => $body,
        }
    };
}

macro_rules! impl_from_kind {
    ($($name:ident),*) => {
        $(
            impl From<$name> for BoundedValue {
                fn from(value: $name) -> Self {
                    BoundedValue::$name(value)
                }
            }
        )*
    };
}

impl_from_kind!(
    Char,
    UnsignedChar,
    SignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double
);

impl BoundedValue {
    /// Name of the held kind.
    pub fn name(&self) -> &'static str {
        match self {
            BoundedValue::Char(_) => Char::NAME,
            BoundedValue::UnsignedChar(_) => UnsignedChar::NAME,
            BoundedValue::SignedChar(_) => SignedChar::NAME,
            BoundedValue::Short(_) => Short::NAME,
            BoundedValue::UnsignedShort(_) => UnsignedShort::NAME,
            BoundedValue::Int(_) => Int::NAME,
            BoundedValue::UnsignedInt(_) => UnsignedInt::NAME,
            BoundedValue::Long(_) => Long::NAME,
            BoundedValue::UnsignedLong(_) => UnsignedLong::NAME,
            BoundedValue::LongLong(_) => LongLong::NAME,
            BoundedValue::UnsignedLongLong(_) => UnsignedLongLong::NAME,
            BoundedValue::Float(_) => Float::NAME,
            BoundedValue::Double(_) => Double::NAME,
        }
    }

    /// Packed width of the held kind.
    pub fn width(&self) -> usize {
        dispatch!(self, v => fixed_size(v))
    }
}

fn fixed_size<T: FixedSize>(_: &T) -> usize {
    T::SIZE
}

impl Write for BoundedValue {
    #[inline]
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        dispatch!(self, v => v.write(buf, cfg))
    }
}

impl EncodeSize for BoundedValue {
    #[inline]
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        dispatch!(self, v => v.encode_size(cfg))
    }
}

impl Read for BoundedValue {
    #[inline]
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        dispatch!(self, v => Ok(BoundedValue::from(v.read_cfg(buf, cfg)?)))
    }
}
