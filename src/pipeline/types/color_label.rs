use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InspectionError;

/// Surface colors a part can be inspected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLabel {
    Yellow,
    White,
    Black,
}

impl ColorLabel {
    pub const ALL: [ColorLabel; 3] = [ColorLabel::Yellow, ColorLabel::White, ColorLabel::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorLabel::Yellow => "yellow",
            ColorLabel::White => "white",
            ColorLabel::Black => "black",
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorLabel {
    type Err = InspectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yellow" => Ok(ColorLabel::Yellow),
            "white" => Ok(ColorLabel::White),
            "black" => Ok(ColorLabel::Black),
            _ => Err(InspectionError::InvalidColor(s.to_string())),
        }
    }
}
