use image::{GrayImage, Luma};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::rect::Rect;

use crate::models::{BoundingBox, Contour};

/// Rectangle colour on the grayscale copy. The green (0, 255, 0) display
/// colour lands on a single channel as its first component.
pub const ANNOTATION_COLOR: Luma<u8> = Luma([0]);
pub const SILHOUETTE_COLOR: Luma<u8> = Luma([255]);

/// Draw each box as `thickness` nested one-pixel outlines, growing inwards so
/// nothing is drawn outside the box.
pub fn draw_boxes(canvas: &mut GrayImage, boxes: &[BoundingBox], thickness: u32) {
    for bbox in boxes {
        for t in 0..thickness {
            if bbox.width <= 2 * t || bbox.height <= 2 * t {
                break;
            }
            let rect = Rect::at((bbox.x + t) as i32, (bbox.y + t) as i32)
                .of_size(bbox.width - 2 * t, bbox.height - 2 * t);
            draw_hollow_rect_mut(canvas, rect, ANNOTATION_COLOR);
        }
    }
}

/// Fill the region enclosed by every contour on a black canvas
pub fn fill_contours(width: u32, height: u32, contours: &[Contour]) -> GrayImage {
    let mut canvas = GrayImage::new(width, height);

    for contour in contours {
        // polygons must not repeat their first point at the end
        let mut points = contour.points.as_slice();
        while points.len() > 1 && points.first() == points.last() {
            points = &points[..points.len() - 1];
        }

        match points {
            [] => {}
            [p] => {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
                    canvas.put_pixel(p.x as u32, p.y as u32, SILHOUETTE_COLOR);
                }
            }
            [a, b] => draw_line_segment_mut(
                &mut canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                SILHOUETTE_COLOR,
            ),
            poly => draw_polygon_mut(&mut canvas, poly, SILHOUETTE_COLOR),
        }
    }

    canvas
}
