//! Codec implementations for each supported category.
//!
//! | Category | Types | Layout |
//! |---|---|---|
//! | Bounded value | [`bounded`] kinds | fixed width, native order |
//! | Native integer | `i32`, `i64` | 4 bytes, the [`bounded::Int`] layout |
//! | Boolean | `bool` | [`crate::SizeConfig::boolean`] bytes |
//! | Native float | `f32`, `f64` | [`crate::SizeConfig::float`] bytes |
//! | Byte/text string | `Bytes`, `Vec<u8>`, `[u8]`, `String`, `str` | length prefix + bytes |
//! | Tuple | `(T0, ..., T11)` | elements in order |
//!
//! Sets and mappings live in [`collections`], where they refuse to pack or unpack.

pub mod bounded;
pub mod bytes;
pub mod collections;
pub mod primitives;
pub mod tuple;
