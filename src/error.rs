use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Image has a zero dimension ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
