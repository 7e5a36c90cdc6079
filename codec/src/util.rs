//! Codec utility functions

use crate::Error;
use bytes::Buf;

/// Checks that the buffer has at least `len` bytes remaining.
///
/// Every read checks first, so a short buffer fails with [`Error::EndOfBuffer`] instead of
/// decoding whatever bytes happen to be left.
#[inline]
pub fn at_least<B: Buf + ?Sized>(buf: &B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        let buf: &[u8] = &[1, 2, 3];
        assert!(at_least(&buf, 0).is_ok());
        assert!(at_least(&buf, 3).is_ok());
        assert_eq!(at_least(&buf, 4), Err(Error::EndOfBuffer));

        // Works through a mutable borrow without consuming anything
        let mut cursor = buf;
        cursor.advance(1);
        let borrowed = &mut cursor;
        assert!(at_least(borrowed, 2).is_ok());
        assert_eq!(at_least(borrowed, 3), Err(Error::EndOfBuffer));
        assert_eq!(cursor.len(), 2);
    }
}
