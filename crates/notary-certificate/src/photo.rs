//! Photo decoding and cover-crop.
//!
//! The photo is cropped, preserving aspect ratio, to the largest centered
//! window with the target box's shape, then resampled to exactly the box.
//! Cropping before resampling keeps the working buffer at the box size no
//! matter how extreme the source aspect ratio is.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::PhotoError;

/// Centered window of the source image that maps onto the target box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SourceCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Computes the cover window for a `src_w × src_h` image into a
/// `target_w × target_h` box.
///
/// Sources wider than the box (by aspect ratio) keep their full height and
/// lose columns on both sides; everything else keeps its full width and loses
/// rows. The window is never smaller than one pixel.
pub fn source_crop(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> SourceCrop {
    let src_ratio = src_w as f64 / src_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    let (width, height) = if src_ratio > target_ratio {
        let w = (src_h as f64 * target_ratio).round() as u32;
        (w.clamp(1, src_w), src_h)
    } else {
        let h = (src_w as f64 / target_ratio).round() as u32;
        (src_w, h.clamp(1, src_h))
    };

    SourceCrop {
        x: (src_w - width) / 2,
        y: (src_h - height) / 2,
        width,
        height,
    }
}

/// Decodes photo bytes; the format is sniffed from the content.
///
/// Decoding runs under the `image` crate's default allocation limits, so an
/// oversized image surfaces as [`PhotoError::Decode`].
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PhotoError> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(PhotoError::Empty { width: img.width(), height: img.height() });
    }
    Ok(img)
}

/// Center-crops `img` to the box's aspect ratio and resamples it with
/// Lanczos3 to exactly `target_w × target_h`.
pub fn cover_crop(img: &DynamicImage, target_w: u32, target_h: u32) -> Result<RgbImage, PhotoError> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(PhotoError::Empty { width: w, height: h });
    }

    let crop = source_crop(w, h, target_w, target_h);
    log::debug!("photo {w}×{h} -> {crop:?}");

    let window = img.crop_imm(crop.x, crop.y, crop.width, crop.height).to_rgb8();
    Ok(imageops::resize(&window, target_w, target_h, FilterType::Lanczos3))
}

/// Decode + cover-crop in one step.
pub fn prepare(bytes: &[u8], target_w: u32, target_h: u32) -> Result<RgbImage, PhotoError> {
    cover_crop(&decode(bytes)?, target_w, target_h)
}
