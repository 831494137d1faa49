//! HSV conversion and in-range masking.
use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::pipeline::types::HsvBounds;

/// Converts one RGB sample to 8-bit HSV: H in `[0, 180)`, S and V in `[0, 255]`.
pub fn rgb_to_hsv(px: &Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = px.0.map(i32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        (255.0 * diff as f64 / v as f64 + 0.5).floor() as i32
    };

    let h = if diff == 0 {
        0
    } else {
        // Sextant numerator, in units of diff/60 degrees.
        let numerator = if v == r {
            g - b
        } else if v == g {
            b - r + 2 * diff
        } else {
            r - g + 4 * diff
        };
        let h = (30.0 * numerator as f64 / diff as f64 + 0.5).floor() as i32;
        if h < 0 {
            h + 180
        } else {
            h
        }
    };

    [h.clamp(0, 255) as u8, s.clamp(0, 255) as u8, v as u8]
}

/// Converts an RGB image into an image whose three channels hold H, S and V.
pub fn to_hsv(image: &RgbImage) -> RgbImage {
    let mut hsv = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(hsv.pixels_mut()) {
        *dst = Rgb(rgb_to_hsv(src));
    }
    hsv
}

/// 255 where every channel is inside `bounds` (inclusive), 0 elsewhere.
pub fn in_range(hsv: &RgbImage, bounds: &HsvBounds) -> GrayImage {
    let mut mask = GrayImage::new(hsv.width(), hsv.height());
    for (src, dst) in hsv.pixels().zip(mask.pixels_mut()) {
        *dst = if bounds.contains(src.0) {
            Luma([255])
        } else {
            Luma([0])
        };
    }
    mask
}
