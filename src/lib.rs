pub mod app;
pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::error::{AppError, InspectionError, SessionError};

pub use crate::config::Settings;
pub use crate::pipeline::{
    ColorDetector, ColorLabel, Inspection, Inspector, ProfileTable, Verdict,
};
