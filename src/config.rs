use serde::{Deserialize, Serialize};

use crate::models::{Retrieval, Variant};

/// Hysteresis thresholds of the edge detector. The gradient operator is the
/// fixed 3x3 Sobel kernel.
pub const LOW_THRESHOLD: f32 = 50.0;
pub const HIGH_THRESHOLD: f32 = 150.0;
/// Boxes must be strictly wider and taller than this to be drawn
pub const MIN_BOX_SIZE: u32 = 50;
pub const RECT_THICKNESS: u32 = 2;

/// Parameters of a [`crate::DiagramExtractor`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub low_threshold: f32,
    pub high_threshold: f32,
    pub min_box_size: u32,
    pub thickness: u32,
    pub variant: Variant,
    pub retrieval: Retrieval,
}

impl ExtractorConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            low_threshold: LOW_THRESHOLD,
            high_threshold: HIGH_THRESHOLD,
            min_box_size: MIN_BOX_SIZE,
            thickness: RECT_THICKNESS,
            variant,
            retrieval: variant.default_retrieval(),
        }
    }

    pub fn annotate() -> Self {
        Self::new(Variant::Annotate)
    }

    pub fn silhouette() -> Self {
        Self::new(Variant::Silhouette)
    }

    pub fn with_retrieval(mut self, retrieval: Retrieval) -> Self {
        self.retrieval = retrieval;
        self
    }

    pub fn with_thresholds(mut self, low: f32, high: f32) -> Self {
        self.low_threshold = low;
        self.high_threshold = high;
        self
    }

    pub fn with_min_box_size(mut self, min_box_size: u32) -> Self {
        self.min_box_size = min_box_size;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::annotate()
    }
}
