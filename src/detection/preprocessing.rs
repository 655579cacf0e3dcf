use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;

/// Convert image to grayscale. 8-bit grayscale input comes back unchanged.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Binary edge map: 255 on edges, 0 elsewhere.
///
/// Canny with a 3x3 Sobel gradient. Pixels above `high_threshold` are edges,
/// pixels above `low_threshold` are kept only when 8-connected to one of them.
pub fn detect_edges(gray: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(gray, low_threshold, high_threshold)
}

pub fn edge_pixel_count(edges: &GrayImage) -> usize {
    edges.pixels().filter(|p| p[0] != 0).count()
}
