mod color_label;
mod color_profile;
mod inspection;

pub use color_label::ColorLabel;
pub use color_profile::{ColorProfile, HsvBounds, ProfileTable, Roi};
pub use inspection::{Blob, Inspection, Verdict};
