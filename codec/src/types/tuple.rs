//! Codec implementations for fixed-arity tuples.
//!
//! Elements are packed back to back with no count or separator; the reader must already know
//! the arity. Each element of the template tuple is the template for the matching element.

use crate::{EncodeSize, Error, Read, SizeConfig, Write};
use bytes::{Buf, BufMut};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: EncodeSize ),*> EncodeSize for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(&self, cfg: &SizeConfig) -> usize {
                    0 $( + self.$index.encode_size(cfg) )*
                }
            }

            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
                    $( self.$index.write(buf, cfg)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
                    Ok(( $( self.$index.read_cfg(buf, cfg)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use crate::{
        decode_one, pack, unpack,
        types::bounded::{Double, Short},
        Error, X86,
    };

    #[test]
    fn test_tuple() {
        let value = (1i32, true, String::from("abc"), Short::from(-7));
        let encoded = pack(&value, &X86).unwrap();
        assert_eq!(encoded.len(), 4 + 1 + (4 + 3) + 2);

        let template = (0i32, false, String::new(), Short::default());
        let decoded = unpack(&encoded, &template, &X86).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_nested_tuple() {
        let value = ((1i64, (2i64, 3i64)), Double::new(0.25));
        let encoded = pack(&value, &X86).unwrap();
        assert_eq!(encoded.len(), 3 * 4 + 8);

        let template = ((0i64, (0i64, 0i64)), Double::default());
        let (decoded, rest) = decode_one(&encoded, &template, &X86).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_borrowed_elements() {
        let name = String::from("x");
        let borrowed = pack(&(&name, &5i32), &X86).unwrap();
        let owned = pack(&(name.clone(), 5i32), &X86).unwrap();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_truncated_element() {
        let encoded = pack(&(1i32, 2i32), &X86).unwrap();
        assert_eq!(
            unpack(&encoded[..6], &(0i32, 0i32), &X86),
            Err(Error::EndOfBuffer)
        );
    }
}
