//! Image asset identifiers.
//!
//! Hosted images are referenced as `image-<id>-<width>x<height>-<format>`,
//! e.g. `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`.

/// Decomposed image asset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Content-addressed asset id.
    pub id: String,
    /// `<width>x<height>` segment.
    pub dimensions: String,
    /// File extension (`jpg`, `png`, `webp`, ...).
    pub format: String,
}

impl ImageAsset {
    /// Parses an asset identifier. Returns `None` for anything that does not
    /// have the `image-<id>-<WxH>-<fmt>` shape.
    pub fn parse(reference: &str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next()?;
        let dimensions = parts.next()?;
        let id = parts.next()?;

        let (width, height) = dimensions.split_once('x')?;
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if id.is_empty() || format.is_empty() || !numeric(width) || !numeric(height) {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            dimensions: dimensions.to_string(),
            format: format.to_string(),
        })
    }

    /// File name on the image CDN: `<id>-<WxH>.<fmt>`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.{}", self.id, self.dimensions, self.format)
    }

    /// Width and height in pixels.
    pub fn size(&self) -> Option<(u32, u32)> {
        let (w, h) = self.dimensions.split_once('x')?;
        Some((w.parse().ok()?, h.parse().ok()?))
    }
}
