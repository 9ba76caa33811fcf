//! Image dimension sniffing from a bounded byte prefix.
//!
//! Only headers are read; nothing is decoded. The prefix is capped at
//! [`MAX_PROBE_BYTES`], which covers the header of almost every PNG, GIF
//! and WebP. JPEGs that carry very large EXIF/ICC segments ahead of the
//! frame header are a known miss: the probe reports "unknown" for them
//! rather than fetching more.

pub mod gif;
pub mod jpeg;
pub mod png;
mod reader;
pub mod webp;

use crate::domain::model::Dimensions;
use crate::domain::ports::RangeFetcher;

pub const MAX_PROBE_BYTES: usize = 512 * 1024;

type FormatParser = fn(&[u8]) -> Option<Dimensions>;

/// Cheapest signature checks first. Formats are mutually exclusive by magic
/// number, so the order has no effect on the answer.
const PARSERS: [(&str, FormatParser); 4] = [
    ("png", png::dimensions as FormatParser),
    ("gif", gif::dimensions as FormatParser),
    ("jpeg", jpeg::dimensions as FormatParser),
    ("webp", webp::dimensions as FormatParser),
];

/// Runs every format parser over `buf` and returns the first answer.
pub fn sniff_dimensions(buf: &[u8]) -> Option<Dimensions> {
    PARSERS.iter().find_map(|(format, parse)| {
        let dims = parse(buf)?;
        tracing::debug!("Detected {} image {}", format, dims);
        Some(dims)
    })
}

pub struct ImageDimensionProbe<F: RangeFetcher> {
    fetcher: F,
}

impl<F: RangeFetcher> ImageDimensionProbe<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Pixel size of the image at `url`, or `None` when it cannot be
    /// determined for any reason. Never fails.
    pub async fn probe(&self, url: &str) -> Option<Dimensions> {
        let response = match self
            .fetcher
            .fetch_range(url, 0, MAX_PROBE_BYTES as u64 - 1)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Image probe fetch failed for {}: {}", url, e);
                return None;
            }
        };

        if response.status != 200 && response.status != 206 {
            tracing::debug!("Image probe got HTTP {} for {}", response.status, url);
            return None;
        }
        if response.body.is_empty() {
            tracing::debug!("Image probe got an empty body for {}", url);
            return None;
        }

        let body = &response.body[..response.body.len().min(MAX_PROBE_BYTES)];
        let dims = sniff_dimensions(body);
        if dims.is_none() {
            tracing::debug!(
                "No image dimensions in first {} bytes of {}",
                body.len(),
                url
            );
        }
        dims
    }
}
