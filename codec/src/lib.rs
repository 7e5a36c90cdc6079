//! Pack values into native-order binary and unpack them against a template.
//!
//! # Overview
//!
//! A binary serialization library that:
//! - Packs primitives, bounded fixed-width values, byte and text strings, tuples and composite
//!   structs into a flat byte sequence
//! - Unpacks such a sequence given a template with the same shape
//!
//! The wire format carries no type tags, field names or version marker. Fixed-width fields use
//! the native byte order; strings are prefixed by their length. Decoding therefore requires
//! exact knowledge of the shape that produced a buffer: the template.
//!
//! # Supported Types
//!
//! - Bounded kinds with a fixed width and validated range: see [`types::bounded`]
//! - Native integers (`i32`, `i64`), always in the 4-byte `Int` layout
//! - `bool` and floats (`f32`, `f64`), whose widths come from the [`SizeConfig`]
//! - Byte strings (`Bytes`, `Vec<u8>`, `[u8]`) and text (`String`, `str`)
//! - Tuples of up to 12 elements
//! - Structs registered with [`impl_composite!`]
//! - Runtime-shaped [`Value`]s
//!
//! Sets and mappings have no deterministic order and fail with [`Error::Unsupported`].
//!
//! # Configuration
//!
//! Every call takes a [`SizeConfig`] by reference. It is a plain immutable value: use the same
//! one to pack and to unpack.
//!
//! # Example
//!
//! ```
//! use parcel_codec::{pack, unpack, types::bounded::{Float, Int}, SizeConfig};
//!
//! let cfg = SizeConfig::default();
//!
//! // Several values pack as a tuple, back to back
//! let packed = pack(&(Int::new(5).unwrap(), Float::new(2.5)), &cfg).unwrap();
//! assert_eq!(packed.len(), 8);
//!
//! // The template only conveys shape
//! let (int, float) = unpack(&packed, &(Int::default(), Float::default()), &cfg).unwrap();
//! assert_eq!(int.get(), 5);
//! assert_eq!(float.get(), 2.5);
//!
//! // Text is length-prefixed
//! let packed = pack("hi", &cfg).unwrap();
//! assert_eq!(packed.len(), 6);
//! assert_eq!(unpack(&packed, &String::new(), &cfg).unwrap(), "hi");
//! ```

pub mod codec;
pub mod composite;
pub mod config;
pub mod error;
pub mod types;
pub mod util;
pub mod value;

// Re-export main types and traits
pub use codec::{
    decode_one, pack, unpack, unpack_exact, Encode, EncodeSize, FixedSize, Read, Write,
};
pub use composite::Composite;
pub use config::{Kind, SizeConfig, X86};
pub use error::Error;
pub use types::bounded;
pub use value::{pack_values, unpack_values, Object, Unpacked, Value};

// Hidden from docs because it is needed by `impl_composite!`.
#[doc(hidden)]
pub use ::bytes;
