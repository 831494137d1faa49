pub mod services;
pub mod types;

pub use services::{ColorDetector, Inspector};
pub use types::{ColorLabel, ColorProfile, HsvBounds, Inspection, ProfileTable, Roi, Verdict};
