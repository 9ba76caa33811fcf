use super::reader::{has_tag, u32_be};
use crate::domain::model::Dimensions;

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Width and height from the IHDR chunk, which must be the first chunk.
pub fn dimensions(buf: &[u8]) -> Option<Dimensions> {
    if !buf.starts_with(SIGNATURE) || buf.len() < 24 {
        return None;
    }
    if !has_tag(buf, 12, b"IHDR") {
        return None;
    }
    Dimensions::new(u32_be(buf, 16)?, u32_be(buf, 20)?)
}
