//! Grayscale PNG export of texture grids

use crate::io::error::{Result, TextureError};
use crate::texture::TextureGrid;
use image::{GrayImage, Luma};
use std::path::Path;

/// Map texture intensities to an 8-bit grayscale image
///
/// Each value `v` becomes `round(v * 255)`; grid row `r`, column `c` becomes
/// pixel `(c, r)`.
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The grid is too large for an image
/// - A value is NaN or infinite
pub fn texture_to_luma(texture: &TextureGrid) -> Result<GrayImage> {
    let (rows, cols) = texture.dim();
    if rows == 0 || cols == 0 {
        return Err(TextureError::InvalidSourceData {
            reason: format!("texture is empty ({cols}x{rows})"),
        });
    }

    let to_u32 = |value: usize| {
        u32::try_from(value).map_err(|e| TextureError::InvalidSourceData {
            reason: format!("dimension {value} does not fit an image: {e}"),
        })
    };
    let mut img = GrayImage::new(to_u32(cols)?, to_u32(rows)?);

    for ((row, col), &value) in texture.indexed_iter() {
        if !value.is_finite() {
            return Err(TextureError::InvalidSourceData {
                reason: format!("non-finite intensity {value} at row {row}, column {col}"),
            });
        }
        let intensity = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        img.put_pixel(col as u32, row as u32, Luma([intensity]));
    }

    Ok(img)
}

/// Export a texture as a grayscale PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The texture cannot be converted (see [`texture_to_luma`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_texture_as_png(texture: &TextureGrid, output_path: &Path) -> Result<()> {
    let img = texture_to_luma(texture)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TextureError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}
