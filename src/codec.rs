//! Raw bytes in, raw bytes out. Decoding and encoding happen here so the
//! extractor itself only ever sees rasters.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::detection::{DiagramExtractor, Extraction};
use crate::error::{ExtractError, Result};

/// A decoded upload together with the format it arrived in
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Encoded output plus the upload and extraction it was rendered from
#[derive(Debug, Clone)]
pub struct EncodedOutput {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub input: DecodedImage,
    pub extraction: Extraction,
}

pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    let format = image::guess_format(bytes).map_err(ExtractError::Decode)?;
    let image = image::load_from_memory_with_format(bytes, format).map_err(ExtractError::Decode)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ExtractError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(DecodedImage { image, format })
}

/// Keep the upload's format when it can be written back, PNG otherwise
pub fn output_format(input: Option<ImageFormat>) -> ImageFormat {
    match input {
        Some(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Tiff)) => format,
        _ => ImageFormat::Png,
    }
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).map_err(ExtractError::Encode)?;
    Ok(buf.into_inner())
}

/// Decode, extract and encode in one go, answering in the upload's format.
/// Nothing is produced on failure.
pub fn extract_bytes(extractor: &DiagramExtractor, bytes: &[u8]) -> Result<EncodedOutput> {
    extract_bytes_as(extractor, bytes, None)
}

/// Like [`extract_bytes`], encoding as `format` when it is writable
pub fn extract_bytes_as(
    extractor: &DiagramExtractor,
    bytes: &[u8],
    format: Option<ImageFormat>,
) -> Result<EncodedOutput> {
    let input = decode(bytes)?;
    let extraction = extractor.extract(&input.image)?;
    let format = output_format(format.or(Some(input.format)));
    let bytes = encode(&extraction.output, format)?;

    Ok(EncodedOutput {
        bytes,
        format,
        input,
        extraction,
    })
}
