use anyhow::Result;
use bytes::Bytes;
use image::DynamicImage;
use picshrink_core::constants::DEFAULT_JPEG_QUALITY;

/// JPEG encoder quality (0-100).
///
/// Resolution is deliberately forgiving: an absent, unparsable, or
/// out-of-range value falls back to the default instead of erroring, and
/// out-of-range values are never clamped to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegQuality(u8);

impl Default for JpegQuality {
    fn default() -> Self {
        JpegQuality(DEFAULT_JPEG_QUALITY)
    }
}

impl JpegQuality {
    /// Resolve a raw form value into a quality setting.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
            Some(q) if (0..=100).contains(&q) => JpegQuality(q as u8),
            _ => JpegQuality::default(),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Encode the bitmap as progressive JPEG at the given quality.
pub fn encode_jpeg(img: &DynamicImage, quality: JpegQuality) -> Result<Bytes> {
    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();

    let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
    comp.set_size(width as usize, height as usize);
    comp.set_quality(quality.value() as f32);
    comp.set_progressive_mode();
    comp.set_optimize_coding(true);

    let mut comp = comp.start_compress(Vec::new())?;
    comp.write_scanlines(&rgb_img)?;
    let jpeg_data = comp.finish()?;

    Ok(Bytes::from(jpeg_data))
}
