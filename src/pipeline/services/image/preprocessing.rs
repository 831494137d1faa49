//! Geometry steps that run before color analysis: fixed-factor area resize and ROI crop.
use image::{imageops, RgbImage};
use tracing::{debug, warn};

use crate::pipeline::types::Roi;

/// Fixed resize factor expressed as `percent / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeScale {
    pub percent: u32,
    pub divisor: u32,
}

impl ResizeScale {
    pub const fn new(percent: u32, divisor: u32) -> Self {
        Self { percent, divisor }
    }

    /// Target size, truncated toward zero on each axis.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.divisor == 0 {
            return (0, 0);
        }
        let apply = |n: u32| (n as u64 * self.percent as u64 / self.divisor as u64) as u32;
        (apply(width), apply(height))
    }
}

/// Resizes `image` by `scale` with area averaging.
pub fn resize_by_scale(image: &RgbImage, scale: ResizeScale) -> RgbImage {
    let (width, height) = scale.target_dimensions(image.width(), image.height());
    debug!(
        "Resizing {}x{} -> {}x{} ({}/{})",
        image.width(),
        image.height(),
        width,
        height,
        scale.percent,
        scale.divisor
    );
    resize_area(image, width, height)
}

/// Area-averaging resample: every output pixel is the coverage-weighted mean of the
/// source pixels under its footprint.
pub fn resize_area(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = image.dimensions();
    if width == 0 || height == 0 || src_w == 0 || src_h == 0 {
        return RgbImage::new(width, height);
    }

    let x_taps = area_taps(src_w, width);
    let y_taps = area_taps(src_h, height);

    // Horizontal pass into a float buffer of width x src_h.
    let mut horizontal = vec![[0f64; 3]; (width * src_h) as usize];
    for y in 0..src_h {
        for (dx, taps) in x_taps.iter().enumerate() {
            let mut acc = [0f64; 3];
            for &(sx, weight) in taps {
                let px = image.get_pixel(sx, y);
                for c in 0..3 {
                    acc[c] += px[c] as f64 * weight;
                }
            }
            horizontal[(y * width) as usize + dx] = acc;
        }
    }

    let mut out = RgbImage::new(width, height);
    for (dy, taps) in y_taps.iter().enumerate() {
        for dx in 0..width {
            let mut acc = [0f64; 3];
            for &(sy, weight) in taps {
                let row = horizontal[(sy * width + dx) as usize];
                for c in 0..3 {
                    acc[c] += row[c] * weight;
                }
            }
            let px = out.get_pixel_mut(dx, dy as u32);
            for c in 0..3 {
                px[c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

/// Per destination index, the source indices it covers with normalized weights.
fn area_taps(src: u32, dst: u32) -> Vec<Vec<(u32, f64)>> {
    let scale = src as f64 / dst as f64;
    (0..dst)
        .map(|d| {
            let start = d as f64 * scale;
            let end = (start + scale).min(src as f64);
            let mut taps = Vec::new();
            let mut s = start.floor() as u32;
            while s < src && (s as f64) < end {
                let covered = end.min(s as f64 + 1.0) - start.max(s as f64);
                if covered > 1e-9 {
                    taps.push((s, covered));
                }
                s += 1;
            }
            if taps.is_empty() {
                // Footprint smaller than a pixel (upscaling): fall back to the nearest source.
                taps.push((start.floor().min((src - 1) as f64) as u32, 1.0));
            }
            let total: f64 = taps.iter().map(|(_, w)| w).sum();
            for tap in taps.iter_mut() {
                tap.1 /= total;
            }
            taps
        })
        .collect()
}

/// Crops `roi` out of `image` without validating it first. Returns the crop and whether
/// the rectangle had to be clipped to fit.
pub fn crop_roi(image: &RgbImage, roi: Roi) -> (RgbImage, bool) {
    let (x, y, w, h) = roi.clip_to(image.width(), image.height());
    let clipped = w != roi.width || h != roi.height;
    if clipped {
        warn!(
            "ROI {:?} exceeds the {}x{} resized image, cropping {}x{} at ({}, {})",
            roi,
            image.width(),
            image.height(),
            w,
            h,
            x,
            y
        );
    }
    (imageops::crop_imm(image, x, y, w, h).to_image(), clipped)
}
