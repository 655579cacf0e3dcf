pub mod codec;
pub mod config;
pub mod debug;
pub mod detection;
pub mod error;
pub mod models;

pub use codec::{DecodedImage, EncodedOutput, extract_bytes, extract_bytes_as};
pub use config::ExtractorConfig;
pub use detection::{DiagramExtractor, Extraction, extract};
pub use error::{ExtractError, Result};
pub use models::{BoundingBox, Contour, Retrieval, Variant};
