// FILE: src/core/assets.rs
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Reads and decodes an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Full-surface background image, scaled to the exact pixel size of the
/// display. Built lazily on the first frame and rebuilt whenever the surface
/// size stops matching the cached size. A missing or broken file is not an
/// error: `image()` is `None` and callers paint a flat fill instead.
#[derive(Debug)]
pub struct Background {
    path: PathBuf,
    size: Option<(u32, u32)>,
    scaled: Option<RgbaImage>,
}

impl Background {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
            scaled: None,
        }
    }

    /// Size the background was last built for; matches the surface after `ensure_size`.
    #[inline(always)]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    #[inline(always)]
    pub fn image(&self) -> Option<&RgbaImage> {
        self.scaled.as_ref()
    }

    /// Reloads and rescales when the surface size differs from the cached one.
    /// Returns `true` when a rebuild happened.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> bool {
        if self.size == Some((width, height)) {
            return false;
        }
        debug!("Background rebuild for {}x{} (was {:?})", width, height, self.size);
        self.scaled = if width == 0 || height == 0 {
            None
        } else {
            match load_image(&self.path) {
                Ok(src) => {
                    info!(
                        "Background {:?} {}x{} -> {}x{}",
                        self.path,
                        src.width(),
                        src.height(),
                        width,
                        height
                    );
                    // Triangle is area-aware when shrinking and smooth when enlarging.
                    Some(imageops::resize(&src, width, height, FilterType::Triangle))
                }
                Err(e) => {
                    warn!("Background unavailable, using flat fill: {}", e);
                    None
                }
            }
        };
        self.size = Some((width, height));
        true
    }
}
