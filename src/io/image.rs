//! PNG encoding and export for rendered avatars

use crate::io::error::{AvatarError, Result, WithPath};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Encode an image as PNG bytes in memory
///
/// # Errors
///
/// Returns [`AvatarError::ImageEncode`] if the encoder fails
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|source| AvatarError::ImageEncode { source })?;
    Ok(bytes.into_inner())
}

/// Export an image as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| AvatarError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
