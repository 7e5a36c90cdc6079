//! Composite objects: structs packed field by field.
//!
//! The wire format carries no field names or tags, so the registered field order is the only
//! schema. [`impl_composite!`](crate::impl_composite) registers that order for a struct and
//! implements the codec traits by visiting the fields in it. Every field must be listed, and
//! every field type must itself implement the codec traits (nested composites included).
//!
//! # Example
//!
//! ```
//! use parcel_codec::{impl_composite, pack, unpack, types::bounded::Short, Composite, SizeConfig};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Reading {
//!     sensor: String,
//!     level: Short,
//!     ok: bool,
//! }
//!
//! impl_composite!(Reading { sensor, level, ok });
//!
//! let cfg = SizeConfig::default();
//! let reading = Reading {
//!     sensor: "t1".into(),
//!     level: Short::new(-40).unwrap(),
//!     ok: true,
//! };
//! let packed = pack(&reading, &cfg).unwrap();
//! assert_eq!(packed.len(), (4 + 2) + 2 + 1);
//! assert_eq!(unpack(&packed, &Reading::default(), &cfg).unwrap(), reading);
//! assert_eq!(Reading::FIELDS, &["sensor", "level", "ok"]);
//! ```

use crate::{EncodeSize, Read, Write};

/// A struct with a registered field order.
pub trait Composite: Write + EncodeSize + Read {
    /// Field names, in wire order.
    const FIELDS: &'static [&'static str];
}

/// Registers the field order of a struct and implements [`Write`], [`EncodeSize`], [`Read`]
/// and [`Composite`] for it.
///
/// Reading uses each field of the template as the template for that field, and builds a new
/// struct from the decoded fields.
#[macro_export]
macro_rules! impl_composite {
    ($type:ident {}) => {
        impl $crate::Write for $type {
            fn write(
                &self,
                _: &mut impl $crate::bytes::BufMut,
                _: &$crate::SizeConfig,
            ) -> ::core::result::Result<(), $crate::Error> {
                Ok(())
            }
        }

        impl $crate::EncodeSize for $type {
            fn encode_size(&self, _: &$crate::SizeConfig) -> usize {
                0
            }
        }

        impl $crate::Read for $type {
            fn read_cfg(
                &self,
                _: &mut impl $crate::bytes::Buf,
                _: &$crate::SizeConfig,
            ) -> ::core::result::Result<Self, $crate::Error> {
                Ok(Self {})
            }
        }

        impl $crate::Composite for $type {
            const FIELDS: &'static [&'static str] = &[];
        }
    };
    ($type:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Write for $type {
            fn write(
                &self,
                buf: &mut impl $crate::bytes::BufMut,
                cfg: &$crate::SizeConfig,
            ) -> ::core::result::Result<(), $crate::Error> {
                $( $crate::Write::write(&self.$field, buf, cfg)?; )+
                Ok(())
            }
        }

        impl $crate::EncodeSize for $type {
            fn encode_size(&self, cfg: &$crate::SizeConfig) -> usize {
                0 $( + $crate::EncodeSize::encode_size(&self.$field, cfg) )+
            }
        }

        impl $crate::Read for $type {
            fn read_cfg(
                &self,
                buf: &mut impl $crate::bytes::Buf,
                cfg: &$crate::SizeConfig,
            ) -> ::core::result::Result<Self, $crate::Error> {
                $( let $field = $crate::Read::read_cfg(&self.$field, buf, cfg)?; )+
                Ok(Self { $( $field ),+ })
            }
        }

        impl $crate::Composite for $type {
            const FIELDS: &'static [&'static str] = &[ $( stringify!($field) ),+ ];
        }
    };
}
