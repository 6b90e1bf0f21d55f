//! In-memory image fixtures for upload tests.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Gradient bitmap, so JPEG re-encoding has realistic content to chew on.
fn gradient(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x + y) % 256) as u8,
        ]);
    }
    img
}

fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode fixture image");
    buffer
}

pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Png)
}

pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Jpeg)
}

pub fn create_test_gif(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Gif)
}

/// Bytes that no image decoder recognizes.
pub fn garbage_bytes() -> Vec<u8> {
    b"This is not an image, no matter what the filename says.".to_vec()
}

/// Decode an image file from disk and return its dimensions.
pub fn dimensions_of(path: &std::path::Path) -> (u32, u32) {
    let img = image::open(path).expect("Failed to open processed image");
    (img.width(), img.height())
}
