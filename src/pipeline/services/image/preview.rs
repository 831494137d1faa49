use image::{imageops, imageops::FilterType, RgbImage};

/// Scales `image` to the fixed presentation size. An empty image renders as a blank canvas.
pub fn render_preview(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == 0 || image.height() == 0 {
        return RgbImage::new(width, height);
    }
    imageops::resize(image, width, height, FilterType::Lanczos3)
}
