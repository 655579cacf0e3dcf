use clap::ValueEnum;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// How the extracted contours are rendered into the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Bounding boxes of large contours drawn over the grayscale input
    Annotate,
    /// Every contour filled white on a black canvas
    Silhouette,
}

impl Variant {
    /// Default contour retrieval. Annotate only boxes outermost borders, so
    /// a shape's edge ring yields one box rather than one per border.
    pub fn default_retrieval(self) -> Retrieval {
        match self {
            Variant::Annotate => Retrieval::External,
            Variant::Silhouette => Retrieval::Full,
        }
    }
}

/// Which borders the contour tracer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Retrieval {
    /// Outermost borders only
    External,
    /// Every border, nested ones included, without hierarchy
    Full,
}

/// Bounding box in the original image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn right(&self) -> u32 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height - 1
    }

    /// Both sides strictly larger than `min_size`
    pub fn exceeds(&self, min_size: u32) -> bool {
        self.width > min_size && self.height > min_size
    }
}

/// A traced border of edge pixels, in simplified chain form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
    /// `false` for the inner border of a hole
    pub outer: bool,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimal enclosing rectangle, inclusive of the extreme pixels
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        // Traced points never leave the edge map, so they are non-negative
        Some(BoundingBox {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contour(points: &[(i32, i32)]) -> Contour {
        Contour {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            outer: true,
        }
    }

    #[test]
    fn bounding_box_is_inclusive() {
        let c = contour(&[(10, 20), (40, 20), (40, 90), (10, 90)]);
        let b = c.bounding_box().unwrap();
        assert_eq!(b, BoundingBox { x: 10, y: 20, width: 31, height: 71 });
        assert_eq!(b.right(), 40);
        assert_eq!(b.bottom(), 90);
    }

    #[test]
    fn single_point_has_unit_box() {
        let b = contour(&[(3, 4)]).bounding_box().unwrap();
        assert_eq!((b.width, b.height), (1, 1));
    }

    #[test]
    fn empty_contour_has_no_box() {
        assert!(contour(&[]).bounding_box().is_none());
    }

    #[test]
    fn annotate_defaults_to_outermost_borders() {
        assert_eq!(Variant::Annotate.default_retrieval(), Retrieval::External);
        assert_eq!(Variant::Silhouette.default_retrieval(), Retrieval::Full);
    }

    #[test]
    fn exceeds_needs_both_sides() {
        let b = BoundingBox { x: 0, y: 0, width: 51, height: 50 };
        assert!(!b.exceeds(50));
        let b = BoundingBox { x: 0, y: 0, width: 51, height: 51 };
        assert!(b.exceeds(50));
    }
}
