pub mod contours;
pub mod preprocessing;
pub mod render;

use image::{DynamicImage, GrayImage};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::models::{BoundingBox, Contour, Variant};

/// Everything one extraction produced, intermediate stages included
#[derive(Debug, Clone)]
pub struct Extraction {
    pub grayscale: GrayImage,
    pub edges: GrayImage,
    pub contours: Vec<Contour>,
    /// Boxes drawn in Annotate mode; empty for Silhouette
    pub boxes: Vec<BoundingBox>,
    pub output: DynamicImage,
}

/// Grayscale -> Canny edges -> contours -> boxes or silhouettes.
///
/// Holds only its configuration, so one extractor can serve any number of
/// images from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DiagramExtractor {
    config: ExtractorConfig,
}

impl DiagramExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self::new(ExtractorConfig::new(variant))
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the full extraction on a decoded image
    pub fn extract(&self, input: &DynamicImage) -> Result<Extraction> {
        let (width, height) = (input.width(), input.height());
        if width == 0 || height == 0 {
            return Err(ExtractError::EmptyImage { width, height });
        }

        let cfg = &self.config;
        debug!(width, height, variant = ?cfg.variant, retrieval = ?cfg.retrieval, "extracting diagram");

        let grayscale = preprocessing::to_grayscale(input);
        let edges = preprocessing::detect_edges(&grayscale, cfg.low_threshold, cfg.high_threshold);
        debug!(edge_pixels = preprocessing::edge_pixel_count(&edges), "edges detected");

        let contours = contours::find_contours(&edges, cfg.retrieval);
        debug!(count = contours.len(), "contours found");

        let (output, boxes) = match cfg.variant {
            Variant::Annotate => {
                let boxes: Vec<BoundingBox> = contours
                    .iter()
                    .filter_map(Contour::bounding_box)
                    .filter(|b| b.exceeds(cfg.min_box_size))
                    .collect();
                debug!(kept = boxes.len(), min_size = cfg.min_box_size, "boxes filtered");

                let mut canvas = grayscale.clone();
                render::draw_boxes(&mut canvas, &boxes, cfg.thickness);
                (DynamicImage::ImageLuma8(canvas), boxes)
            }
            Variant::Silhouette => {
                let mask = render::fill_contours(width, height, &contours);
                let output = if !input.color().has_color() {
                    DynamicImage::ImageLuma8(mask)
                } else {
                    DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(mask).to_rgb8())
                };
                (output, Vec::new())
            }
        };

        Ok(Extraction {
            grayscale,
            edges,
            contours,
            boxes,
            output,
        })
    }
}

/// Extract with the fixed default parameters of `variant`, returning only the
/// output image.
pub fn extract(input: &DynamicImage, variant: Variant) -> Result<DynamicImage> {
    DiagramExtractor::for_variant(variant)
        .extract(input)
        .map(|extraction| extraction.output)
}
