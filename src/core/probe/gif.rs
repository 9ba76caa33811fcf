use super::reader::u16_le;
use crate::domain::model::Dimensions;

pub const SIGNATURES: [&[u8; 6]; 2] = [b"GIF87a", b"GIF89a"];

/// Logical screen size from the GIF header.
pub fn dimensions(buf: &[u8]) -> Option<Dimensions> {
    if buf.len() < 10 || !SIGNATURES.iter().any(|sig| buf.starts_with(*sig)) {
        return None;
    }
    Dimensions::new(u16_le(buf, 6)?.into(), u16_le(buf, 8)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_BY_ONE: [u8; 10] = [b'G', b'I', b'F', b'8', b'9', b'a', 1, 0, 1, 0];

    #[test]
    fn test_one_by_one() {
        let dims = dimensions(&ONE_BY_ONE).unwrap();
        assert_eq!((dims.width(), dims.height()), (1, 1));
    }

    #[test]
    fn test_gif87a_little_endian() {
        let buf = [b'G', b'I', b'F', b'8', b'7', b'a', 0x80, 0x02, 0xE0, 0x01];
        let dims = dimensions(&buf).unwrap();
        assert_eq!((dims.width(), dims.height()), (640, 480));
    }

    #[test]
    fn test_any_flipped_magic_byte_rejects() {
        for i in 0..6 {
            let mut buf = ONE_BY_ONE;
            buf[i] ^= 0x01;
            assert!(dimensions(&buf).is_none(), "flipped byte {}", i);
        }
    }

    #[test]
    fn test_short_or_zero() {
        assert!(dimensions(&ONE_BY_ONE[..9]).is_none());
        let mut buf = ONE_BY_ONE;
        buf[6] = 0;
        assert!(dimensions(&buf).is_none());
    }
}
