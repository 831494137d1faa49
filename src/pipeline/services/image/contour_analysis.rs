//! Blob extraction on binary masks.
use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::drawing::draw_line_segment_mut;

/// Outermost borders of the mask's foreground components, with straight runs
/// compressed to their end points. Holes and components nested inside holes are skipped.
/// Components touching the mask edge are reported like any other.
pub fn external_contours(mask: &GrayImage) -> Vec<Vec<(i32, i32)>> {
    // find_contours labels an edge-touching component as a hole; trace on a zero frame.
    let padded = pad_with_zeros(mask);
    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .map(|contour| {
            let points = contour.points.iter().map(|p| (p.x - 1, p.y - 1)).collect();
            compress_runs(points)
        })
        .collect()
}

fn pad_with_zeros(mask: &GrayImage) -> GrayImage {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);
    padded
}

/// Drops every point whose incoming step equals its outgoing step, leaving only
/// the corners of horizontal, vertical and diagonal runs.
pub fn compress_runs(points: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let step = |a: (i32, i32), b: (i32, i32)| ((b.0 - a.0).signum(), (b.1 - a.1).signum());
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect()
}

/// Enclosed polygon area (shoelace formula).
pub fn polygon_area(points: &[(i32, i32)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.0 as i64 * b.1 as i64 - b.0 as i64 * a.1 as i64)
        .sum();
    twice.abs() as f64 / 2.0
}

/// Draws the closed polyline through `points` with a square pen of `thickness` pixels.
pub fn draw_contour(image: &mut RgbImage, points: &[(i32, i32)], color: Rgb<u8>, thickness: u32) {
    if points.is_empty() {
        return;
    }
    let thickness = thickness.max(1) as i32;
    let half = thickness / 2;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        for oy in 0..thickness {
            for ox in 0..thickness {
                let (dx, dy) = ((ox - half) as f32, (oy - half) as f32);
                draw_line_segment_mut(
                    image,
                    (a.0 as f32 + dx, a.1 as f32 + dy),
                    (b.0 as f32 + dx, b.1 as f32 + dy),
                    color,
                );
            }
        }
    }
}
