use super::reader::{has_tag, u16_le, u24_le, u32_le};
use crate::domain::model::Dimensions;

const VP8L_SIGNATURE: u8 = 0x2F;
const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];
/// How far into a `VP8 ` payload the keyframe start code is searched for.
const VP8_SCAN_WINDOW: usize = 64;

/// Extended header: flags(1) reserved(3) width-1 (u24 LE) height-1 (u24 LE).
pub fn vp8x_dimensions(payload: &[u8]) -> Option<Dimensions> {
    if payload.len() < 10 {
        return None;
    }
    Dimensions::new(u24_le(payload, 4)? + 1, u24_le(payload, 7)? + 1)
}

/// Lossless header: signature byte, then 14-bit width-1 and 14-bit height-1
/// packed LSB first across four bytes.
pub fn vp8l_dimensions(payload: &[u8]) -> Option<Dimensions> {
    if payload.len() < 5 || payload[0] != VP8L_SIGNATURE {
        return None;
    }
    let [b0, b1, b2, b3] = [payload[1], payload[2], payload[3], payload[4]].map(u32::from);
    let width = 1 + (b0 | ((b1 & 0x3F) << 8));
    let height = 1 + ((b1 >> 6) | (b2 << 2) | ((b3 & 0x0F) << 10));
    Dimensions::new(width, height)
}

/// Lossy keyframe: locates the start code within the first bytes of the
/// payload and reads two LE u16 whose top two bits are a scale, not size.
pub fn vp8_dimensions(payload: &[u8]) -> Option<Dimensions> {
    let window = &payload[..payload.len().min(VP8_SCAN_WINDOW)];
    let at = window
        .windows(7)
        .position(|candidate| candidate.starts_with(&VP8_START_CODE))?;
    let width = u16_le(window, at + 3)? & 0x3FFF;
    let height = u16_le(window, at + 5)? & 0x3FFF;
    Dimensions::new(width.into(), height.into())
}

/// Walks the RIFF sub-chunks after the `WEBP` form type.
pub fn dimensions(buf: &[u8]) -> Option<Dimensions> {
    if buf.len() < 16 || !has_tag(buf, 0, b"RIFF") || !has_tag(buf, 8, b"WEBP") {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= buf.len() {
        let tag = &buf[pos..pos + 4];
        let size = usize::try_from(u32_le(buf, pos + 4)?).ok()?;
        let start = pos + 8;
        let end = start.checked_add(size)?;
        if end > buf.len() {
            return None;
        }
        let payload = &buf[start..end];

        match tag {
            b"VP8X" => return vp8x_dimensions(payload),
            b"VP8L" => return vp8l_dimensions(payload),
            // No start code in the window: a later chunk may still answer.
            b"VP8 " => {
                if let Some(dims) = vp8_dimensions(payload) {
                    return Some(dims);
                }
            }
            _ => {}
        }

        // Odd-sized payloads carry one pad byte.
        pos = end + (size & 1);
    }
    None
}
