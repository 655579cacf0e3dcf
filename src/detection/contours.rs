use image::GrayImage;
use imageproc::contours::{self, BorderType};
use imageproc::point::Point;

use crate::models::{Contour, Retrieval};

/// Trace borders of the non-zero regions of a binary edge map
pub fn find_contours(edges: &GrayImage, retrieval: Retrieval) -> Vec<Contour> {
    contours::find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| match retrieval {
            Retrieval::Full => true,
            Retrieval::External => c.border_type == BorderType::Outer && c.parent.is_none(),
        })
        .map(|c| Contour {
            outer: c.border_type == BorderType::Outer,
            points: simplify_chain(&c.points),
        })
        .filter(|c| !c.is_empty())
        .collect()
}

/// Collapse straight runs (horizontal, vertical or diagonal) of a closed
/// chain to their endpoints.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let mut chain = points.to_vec();
    chain.dedup();
    while chain.len() > 1 && chain.first() == chain.last() {
        chain.pop();
    }

    let n = chain.len();
    if n <= 2 {
        return chain;
    }

    let step = |from: Point<i32>, to: Point<i32>| ((to.x - from.x).signum(), (to.y - from.y).signum());

    let simplified: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = chain[(i + n - 1) % n];
            let next = chain[(i + 1) % n];
            step(prev, chain[i]) != step(chain[i], next)
        })
        .map(|i| chain[i])
        .collect();

    if simplified.is_empty() {
        vec![chain[0]]
    } else {
        simplified
    }
}
