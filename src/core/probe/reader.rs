//! Bounds-checked fixed-width integer reads. Every reader returns `None`
//! when the field would run past the end of the buffer.

fn array<const N: usize>(buf: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    buf.get(offset..end)?.try_into().ok()
}

pub(crate) fn u16_be(buf: &[u8], offset: usize) -> Option<u16> {
    array(buf, offset).map(u16::from_be_bytes)
}

pub(crate) fn u16_le(buf: &[u8], offset: usize) -> Option<u16> {
    array(buf, offset).map(u16::from_le_bytes)
}

pub(crate) fn u24_le(buf: &[u8], offset: usize) -> Option<u32> {
    let [b0, b1, b2] = array::<3>(buf, offset)?;
    Some(u32::from_le_bytes([b0, b1, b2, 0]))
}

pub(crate) fn u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    array(buf, offset).map(u32::from_be_bytes)
}

pub(crate) fn u32_le(buf: &[u8], offset: usize) -> Option<u32> {
    array(buf, offset).map(u32::from_le_bytes)
}

/// True when `tag` sits at `offset`.
pub(crate) fn has_tag(buf: &[u8], offset: usize, tag: &[u8]) -> bool {
    offset
        .checked_add(tag.len())
        .and_then(|end| buf.get(offset..end))
        .is_some_and(|found| found == tag)
}
