use std::path::PathBuf;

use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Inspection Error: {0}")]
    Inspection(#[from] InspectionError),
    #[error("Session Error: {0}")]
    Session(#[from] SessionError),
    #[error("UI Error: {0}")]
    Ui(String),
}

// Detection routine error type
#[derive(Error, Debug)]
pub enum InspectionError {
    #[error("Unable to read the image at {}: {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please select an image first.")]
    NoImageSelected,
}
