use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader, Rgb, RgbImage};
use tracing::{debug, info};

use super::contour_analysis::{draw_contour, external_contours, polygon_area};
use super::hsv_threshold::{in_range, to_hsv};
use super::preprocessing::{crop_roi, resize_by_scale, ResizeScale};
use crate::config::DetectionSettings;
use crate::error::InspectionError;
use crate::pipeline::types::{Blob, ColorLabel, Inspection, ProfileTable, Verdict};

/// What the shell needs from a detection backend.
pub trait Inspector {
    /// Loads an image for display, without running detection.
    fn load(&self, path: &Path) -> Result<RgbImage, InspectionError>;

    fn inspect(&self, path: &Path, label: ColorLabel) -> Result<Inspection, InspectionError>;
}

/// Decides whether a sufficiently large blob of the expected color sits inside
/// that color's region of interest.
#[derive(Debug, Clone)]
pub struct ColorDetector {
    profiles: ProfileTable,
    scale: ResizeScale,
    min_contour_area: f64,
    contour_color: Rgb<u8>,
    contour_thickness: u32,
}

impl ColorDetector {
    pub fn new(profiles: ProfileTable, settings: &DetectionSettings) -> Self {
        Self {
            profiles,
            scale: ResizeScale::new(settings.scale_percent, settings.scale_divisor),
            min_contour_area: settings.min_contour_area,
            contour_color: Rgb(settings.contour_color),
            contour_thickness: settings.contour_thickness,
        }
    }

    pub fn resize(&self, image: &RgbImage) -> RgbImage {
        resize_by_scale(image, self.scale)
    }

    /// Runs detection on an image that has already been resized.
    pub fn inspect_resized(
        &self,
        resized: &RgbImage,
        label: ColorLabel,
    ) -> Result<Inspection, InspectionError> {
        let profile = self.profiles.get(label)?;
        let (mut crop, roi_clipped) = crop_roi(resized, profile.roi);

        let mask = in_range(&to_hsv(&crop), &profile.bounds);
        let contours = external_contours(&mask);
        debug!("{} external contours in {} ROI", contours.len(), label);

        let mut blobs = Vec::new();
        for points in contours {
            let area = polygon_area(&points);
            if area > self.min_contour_area {
                draw_contour(&mut crop, &points, self.contour_color, self.contour_thickness);
                blobs.push(Blob { points, area });
            }
        }

        let verdict = if blobs.is_empty() {
            Verdict::Fail
        } else {
            Verdict::Pass
        };
        info!(
            "Inspection for {}: {:?} ({} qualifying blobs)",
            label,
            verdict,
            blobs.len()
        );

        Ok(Inspection {
            label,
            verdict,
            crop,
            blobs,
            roi_clipped,
        })
    }
}

impl Default for ColorDetector {
    fn default() -> Self {
        Self::new(ProfileTable::builtin(), &DetectionSettings::default())
    }
}

impl Inspector for ColorDetector {
    fn load(&self, path: &Path) -> Result<RgbImage, InspectionError> {
        let load_failure = |source: ImageError| InspectionError::LoadFailure {
            path: path.to_path_buf(),
            source,
        };
        let mut decoder = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| load_failure(ImageError::IoError(e)))?
            .into_decoder()
            .map_err(load_failure)?;
        // Photos from phones are often stored sideways with an EXIF rotation tag.
        let orientation = decoder.orientation().map_err(load_failure)?;
        let mut image = DynamicImage::from_decoder(decoder).map_err(load_failure)?;
        image.apply_orientation(orientation);
        debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            orientation
        );
        Ok(image.to_rgb8())
    }

    fn inspect(&self, path: &Path, label: ColorLabel) -> Result<Inspection, InspectionError> {
        // Validate the label before touching the file.
        self.profiles.get(label)?;
        let source = self.load(path)?;
        let resized = self.resize(&source);
        self.inspect_resized(&resized, label)
    }
}
