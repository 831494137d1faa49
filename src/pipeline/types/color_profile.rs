//! Declarative color table: HSV threshold pair plus region of interest per label.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ColorLabel;
use crate::error::InspectionError;

/// Inclusive per-channel HSV range. Hue is in the 8-bit `[0, 180)` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvBounds {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvBounds {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        hsv.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(value, (lo, hi))| lo <= value && value <= hi)
    }
}

/// Rectangle in pixel coordinates of the resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Roi {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersects the rectangle with a `width`×`height` image, returning `(x, y, w, h)`.
    /// The result is empty (zero sized) when the origin lies outside the image.
    pub fn clip_to(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let x0 = self.x.min(width);
        let y0 = self.y.min(height);
        let x1 = self.x.saturating_add(self.width).min(width);
        let y1 = self.y.saturating_add(self.height).min(height);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub bounds: HsvBounds,
    pub roi: Roi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: IndexMap<ColorLabel, ColorProfile>,
}

impl ProfileTable {
    /// The factory calibration shipped with the tool.
    pub fn builtin() -> Self {
        let mut profiles = IndexMap::new();
        profiles.insert(
            ColorLabel::Yellow,
            ColorProfile {
                bounds: HsvBounds::new([15, 95, 90], [50, 255, 255]),
                roi: Roi::new(120, 680, 300, 300),
            },
        );
        profiles.insert(
            ColorLabel::White,
            ColorProfile {
                bounds: HsvBounds::new([60, 0, 180], [85, 65, 255]),
                roi: Roi::new(300, 15, 425, 200),
            },
        );
        profiles.insert(
            ColorLabel::Black,
            ColorProfile {
                bounds: HsvBounds::new([100, 0, 0], [115, 108, 140]),
                roi: Roi::new(300, 15, 425, 200),
            },
        );
        Self { profiles }
    }

    /// Builds a table from string-keyed entries, as they come out of a settings source.
    pub fn from_entries(entries: &IndexMap<String, ColorProfile>) -> Result<Self, InspectionError> {
        let mut profiles = IndexMap::with_capacity(entries.len());
        for (key, profile) in entries {
            let label: ColorLabel = key.parse()?;
            profiles.insert(label, *profile);
        }
        Ok(Self { profiles })
    }

    pub fn to_entries(&self) -> IndexMap<String, ColorProfile> {
        self.profiles
            .iter()
            .map(|(label, profile)| (label.to_string(), *profile))
            .collect()
    }

    pub fn get(&self, label: ColorLabel) -> Result<&ColorProfile, InspectionError> {
        self.profiles
            .get(&label)
            .ok_or_else(|| InspectionError::InvalidColor(label.to_string()))
    }

    pub fn lookup(&self, label: &str) -> Result<&ColorProfile, InspectionError> {
        self.get(label.parse()?)
    }

    pub fn bounds(&self, label: &str) -> Result<HsvBounds, InspectionError> {
        self.lookup(label).map(|profile| profile.bounds)
    }

    pub fn roi(&self, label: &str) -> Result<Roi, InspectionError> {
        self.lookup(label).map(|profile| profile.roi)
    }

    pub fn labels(&self) -> impl Iterator<Item = ColorLabel> + '_ {
        self.profiles.keys().copied()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_yellow_profile_matches_calibration() {
        let table = ProfileTable::builtin();
        let bounds = table.bounds("yellow").unwrap();
        assert_eq!(bounds.lower, [15, 95, 90]);
        assert_eq!(bounds.upper, [50, 255, 255]);
        assert_eq!(table.roi("yellow").unwrap(), Roi::new(120, 680, 300, 300));
    }

    #[test]
    fn builtin_white_profile_matches_calibration() {
        let table = ProfileTable::builtin();
        let bounds = table.bounds("white").unwrap();
        assert_eq!(bounds.lower, [60, 0, 180]);
        assert_eq!(bounds.upper, [85, 65, 255]);
        assert_eq!(table.roi("white").unwrap(), Roi::new(300, 15, 425, 200));
    }

    #[test]
    fn builtin_black_profile_matches_calibration() {
        let table = ProfileTable::builtin();
        let bounds = table.bounds("black").unwrap();
        assert_eq!(bounds.lower, [100, 0, 0]);
        assert_eq!(bounds.upper, [115, 108, 140]);
        assert_eq!(table.roi("black").unwrap(), Roi::new(300, 15, 425, 200));
    }

    #[test]
    fn unsupported_label_is_invalid_argument() {
        let table = ProfileTable::builtin();
        assert!(matches!(
            table.bounds("green"),
            Err(InspectionError::InvalidColor(_))
        ));
        assert!(matches!(table.roi("red"), Err(InspectionError::InvalidColor(_))));
    }

    #[test]
    fn missing_entry_for_known_label_is_invalid() {
        let mut entries = ProfileTable::builtin().to_entries();
        entries.shift_remove("black");
        let table = ProfileTable::from_entries(&entries).unwrap();
        assert!(matches!(
            table.get(ColorLabel::Black),
            Err(InspectionError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_entries_rejects_unknown_keys() {
        let mut entries = ProfileTable::builtin().to_entries();
        let yellow = entries["yellow"];
        entries.insert("magenta".to_string(), yellow);
        assert!(ProfileTable::from_entries(&entries).is_err());
    }

    #[test]
    fn labels_follow_table_order() {
        let labels: Vec<ColorLabel> = ProfileTable::builtin().labels().collect();
        assert_eq!(labels, ColorLabel::ALL.to_vec());

        let mut entries = ProfileTable::builtin().to_entries();
        entries.shift_remove("white");
        let table = ProfileTable::from_entries(&entries).unwrap();
        let labels: Vec<ColorLabel> = table.labels().collect();
        assert_eq!(labels, vec![ColorLabel::Yellow, ColorLabel::Black]);
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let bounds = HsvBounds::new([15, 95, 90], [50, 255, 255]);
        assert!(bounds.contains([15, 95, 90]));
        assert!(bounds.contains([50, 255, 255]));
        assert!(!bounds.contains([14, 200, 200]));
        assert!(!bounds.contains([30, 94, 200]));
    }

    #[test]
    fn roi_clipping_follows_slice_semantics() {
        let roi = Roi::new(120, 680, 300, 300);
        assert_eq!(roi.clip_to(1000, 1000), (120, 680, 300, 300));
        assert_eq!(roi.clip_to(300, 800), (120, 680, 180, 120));
        assert_eq!(roi.clip_to(100, 100), (100, 100, 0, 0));
    }
}
