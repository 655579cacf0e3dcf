mod fixtures;
pub use fixtures::*;

// Re-export commonly used types for tests
pub use diagram_extractor::{
    BoundingBox, DiagramExtractor, ExtractError, Extraction, ExtractorConfig, Retrieval, Variant,
};
