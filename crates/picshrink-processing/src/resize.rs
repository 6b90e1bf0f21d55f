//! Decode and downscale (validation phase two + transform).

use anyhow::{anyhow, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use picshrink_core::constants::RESIZE_RATIO;
use std::io::Cursor;

/// Fully decode `data` into a pixel bitmap.
///
/// Runs after the structural probe has already accepted the bytes, so a
/// failure here is the "passed verification but does not decode" case.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    Ok(img)
}

/// Target dimensions after the fixed downscale: integer truncation of
/// `side * ratio`, matching `floor` for the non-negative sizes involved.
pub fn halved_dimensions(width: u32, height: u32) -> (u32, u32) {
    let new_width = (width as f64 * RESIZE_RATIO) as u32;
    let new_height = (height as f64 * RESIZE_RATIO) as u32;
    (new_width, new_height)
}

/// Downscale the image to half its dimensions with bilinear resampling.
///
/// Inputs with a dimension that truncates to zero (1xN, Nx1) cannot produce
/// a valid bitmap and are reported as a processing failure.
pub fn shrink(img: &DynamicImage) -> Result<DynamicImage> {
    let (new_width, new_height) = halved_dimensions(img.width(), img.height());

    if new_width == 0 || new_height == 0 {
        return Err(anyhow!(
            "image too small to downscale: {}x{}",
            img.width(),
            img.height()
        ));
    }

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        new_width,
        new_height,
        "Downscaling image"
    );

    Ok(img.resize_exact(new_width, new_height, FilterType::Triangle))
}
