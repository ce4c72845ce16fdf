use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use recicla_core::models::attachment::ImageAttachment;
use tracing::debug;

use crate::error::ExtractError;

/// Report an image's pixel dimensions.
///
/// No visual analysis happens here; that is left to the model.
pub fn describe_image(bytes: &[u8]) -> Result<String, ExtractError> {
    let (width, height) = image_dimensions(bytes)?;
    Ok(format!("Imagem carregada com dimensões: {width}x{height}"))
}

/// Width and height in pixels, read from the image header.
pub fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), ExtractError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ExtractError::Image(e.to_string()))?;

    let format = reader
        .format()
        .ok_or_else(|| ExtractError::Image("formato de imagem não reconhecido".to_string()))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ExtractError::Image(e.to_string()))?;

    debug!(?format, width, height, "decoded image header");
    Ok((width, height))
}

/// Image formats Anthropic's Messages API accepts in image blocks.
pub const ATTACHMENT_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Validate an uploaded image and wrap it for sending to the model.
///
/// Only [`ATTACHMENT_FORMATS`] are accepted; other decodable formats (BMP,
/// TIFF, ...) are rejected.
pub fn image_attachment(bytes: &[u8]) -> Result<ImageAttachment, ExtractError> {
    let format = image::guess_format(bytes).map_err(|e| ExtractError::Image(e.to_string()))?;
    if !ATTACHMENT_FORMATS.contains(&format) {
        return Err(ExtractError::Image(format!(
            "formato {} não suportado pelo modelo",
            format.to_mime_type()
        )));
    }
    image_dimensions(bytes)?;

    Ok(ImageAttachment {
        media_type: format.to_mime_type().to_string(),
        bytes: bytes.to_vec(),
    })
}
