use image::RgbImage;

use super::ColorLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn message(&self, label: ColorLabel) -> String {
        match self {
            Verdict::Pass => format!("Pass: {} object detected.", label),
            Verdict::Fail => format!("Fail: {} object not detected.", label),
        }
    }
}

/// An external contour whose enclosed area cleared the minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub points: Vec<(i32, i32)>,
    pub area: f64,
}

/// Outcome of one detection call. Never cached; each button press builds a new one.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub label: ColorLabel,
    pub verdict: Verdict,
    /// The region of interest, with qualifying blobs drawn on it.
    pub crop: RgbImage,
    pub blobs: Vec<Blob>,
    /// Set when the region of interest ran past the resized image.
    pub roi_clipped: bool,
}

impl Inspection {
    pub fn message(&self) -> String {
        self.verdict.message(self.label)
    }
}
