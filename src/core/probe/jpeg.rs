use super::reader::u16_be;
use crate::domain::model::Dimensions;

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;

/// SOF0..SOF15 minus DHT (C4), JPG (C8) and DAC (CC).
pub fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF)
}

/// Decodes a frame header. `segment` starts at the two-byte length field:
/// length(2) precision(1) height(2) width(2).
pub fn frame_header_dimensions(segment: &[u8]) -> Option<Dimensions> {
    let precision = *segment.get(2)?;
    if precision == 0 {
        return None;
    }
    let height = u16_be(segment, 3)?;
    let width = u16_be(segment, 5)?;
    Dimensions::new(width.into(), height.into())
}

/// Walks the marker stream until the first SOF segment.
///
/// Fails when the SOF lies past the end of `buf`. Files with large EXIF or
/// ICC blocks ahead of the frame header can therefore go unanswered when
/// only a prefix was fetched.
pub fn dimensions(buf: &[u8]) -> Option<Dimensions> {
    if buf.len() < 4 || buf[0] != MARKER_PREFIX || buf[1] != SOI {
        return None;
    }

    let mut pos = 2;
    while pos + 1 < buf.len() {
        if buf[pos] != MARKER_PREFIX {
            pos += 1;
            continue;
        }

        // Any number of 0xFF fill bytes may precede the marker type.
        let mut type_pos = pos + 1;
        while buf.get(type_pos) == Some(&MARKER_PREFIX) {
            type_pos += 1;
        }
        let marker = *buf.get(type_pos)?;
        pos = type_pos + 1;

        if marker == SOI || marker == EOI {
            continue;
        }

        let length = u16_be(buf, pos)?;
        if length < 2 {
            return None;
        }
        if is_start_of_frame(marker) {
            return frame_header_dimensions(&buf[pos..]);
        }
        pos += usize::from(length);
    }
    None
}
