pub mod color_detector;
pub mod contour_analysis;
pub mod hsv_threshold;
pub mod preprocessing;
pub mod preview;

pub use color_detector::{ColorDetector, Inspector};
pub use preprocessing::ResizeScale;
pub use preview::render_preview;
