#![allow(dead_code)]

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

/// Bounds of the square drawn by [`black_square_on_white`]
pub const SQUARE_X: u32 = 50;
pub const SQUARE_Y: u32 = 60;
pub const SQUARE_SIZE: u32 = 100;

/// 10x10 image of a single colour, no edges anywhere
pub fn uniform_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([120u8, 130u8, 140u8])))
}

/// 200x220 white image with one filled 100x100 black square
pub fn black_square_on_white() -> DynamicImage {
    let img = GrayImage::from_fn(200, 220, |x, y| {
        let inside = (SQUARE_X..SQUARE_X + SQUARE_SIZE).contains(&x)
            && (SQUARE_Y..SQUARE_Y + SQUARE_SIZE).contains(&y);
        if inside { Luma([0u8]) } else { Luma([255u8]) }
    });
    DynamicImage::ImageLuma8(img)
}

/// Same square, as an RGB image
pub fn black_square_on_white_rgb() -> DynamicImage {
    DynamicImage::ImageRgb8(black_square_on_white().to_rgb8())
}

/// A large square, a small square and a thin bar on white
pub fn mixed_shapes() -> DynamicImage {
    let img = GrayImage::from_fn(240, 200, |x, y| {
        let large = (20..120).contains(&x) && (20..140).contains(&y);
        let small = (150..180).contains(&x) && (30..60).contains(&y);
        let bar = (140..230).contains(&x) && (150..160).contains(&y);
        if large || small || bar { Luma([10u8]) } else { Luma([245u8]) }
    });
    DynamicImage::ImageLuma8(img)
}

pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode test image");
    buf.into_inner()
}

/// Writes an image into a temp dir and returns its path
pub fn write_png(dir: &tempfile::TempDir, name: &str, img: &DynamicImage) -> std::path::PathBuf {
    let path = dir.path().join(name);
    img.save_with_format(&path, ImageFormat::Png)
        .expect("Failed to save test image");
    path
}

pub fn assert_near(actual: u32, expected: u32, tolerance: u32, what: &str) {
    assert!(
        actual.abs_diff(expected) <= tolerance,
        "{what}: got {actual}, expected {expected} ± {tolerance}"
    );
}
