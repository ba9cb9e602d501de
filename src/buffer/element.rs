//! # Element Encoding
//!
//! How a typed value becomes a fixed-size block of bytes and back.
//!
//! ## Plain English
//!
//! The ring buffer only knows about byte blocks of one fixed width. This
//! trait is the translator: it says how wide a value is and how to lay it
//! out in (and read it back from) such a block.

/// A value with a fixed byte width that can live in a ring buffer slot.
///
/// Integers and floats are stored little-endian.
pub trait Element: Sized {
    /// Width of one encoded element in bytes
    const SIZE: usize;

    /// Encodes `self` into `out`.
    ///
    /// `out` is always exactly [`Self::SIZE`] bytes long.
    fn write_to(&self, out: &mut [u8]);

    /// Decodes a value from `bytes`.
    ///
    /// `bytes` is always exactly [`Self::SIZE`] bytes long.
    fn read_from(bytes: &[u8]) -> Self;
}

macro_rules! impl_element_le {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                #[inline]
                fn write_to(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_from(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_element_le!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<const N: usize> Element for [u8; N] {
    const SIZE: usize = N;

    #[inline]
    fn write_to(&self, out: &mut [u8]) {
        out.copy_from_slice(self);
    }

    #[inline]
    fn read_from(bytes: &[u8]) -> Self {
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Element>(value: &T) -> Vec<u8> {
        let mut out = vec![0u8; T::SIZE];
        value.write_to(&mut out);
        out
    }

    #[test]
    fn test_sizes() {
        assert_eq!(u8::SIZE, 1);
        assert_eq!(u32::SIZE, 4);
        assert_eq!(f64::SIZE, 8);
        assert_eq!(<[u8; 16]>::SIZE, 16);
    }

    #[test]
    fn test_integers_are_little_endian() {
        assert_eq!(encode(&0x0102_0304u32), vec![0x04, 0x03, 0x02, 0x01]);
        assert_eq!(i16::read_from(&[0xff, 0xff]), -1);
    }

    #[test]
    fn test_byte_arrays_are_copied_verbatim() {
        let block = [7u8, 0, 9, 42];
        assert_eq!(encode(&block), block.to_vec());
        assert_eq!(<[u8; 4]>::read_from(&block), block);
    }
}
