use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::AppError;
use crate::pipeline::{ColorProfile, ProfileTable};

/// Optional settings file, looked up in the working directory (any format `config` knows).
pub const CONFIG_FILE: &str = "part_inspector";
pub const ENV_PREFIX: &str = "PART_INSPECTOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub window: WindowSettings,
    pub preview: PreviewSettings,
    pub detection: DetectionSettings,
    pub profiles: IndexMap<String, ColorProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewSettings {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Resize factor numerator; the image is scaled by `scale_percent / scale_divisor`.
    pub scale_percent: u32,
    pub scale_divisor: u32,
    /// A blob qualifies when its enclosed area is strictly greater than this.
    pub min_contour_area: f64,
    pub contour_color: [u8; 3],
    pub contour_thickness: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowSettings::default(),
            preview: PreviewSettings::default(),
            detection: DetectionSettings::default(),
            profiles: ProfileTable::builtin().to_entries(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Image Processing".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            // ROIs are in pixels of an image scaled by exactly this factor.
            scale_percent: 50,
            scale_divisor: 120,
            min_contour_area: 500.0,
            contour_color: [255, 0, 0],
            contour_thickness: 2,
        }
    }
}

impl Settings {
    /// Defaults, then `part_inspector.{toml,json,...}` if present, then
    /// `PART_INSPECTOR__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let builder = Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::from_builder(builder)
    }

    /// A builder seeded with the built-in defaults, for layering further sources.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder().add_source(Config::try_from(&Settings::default())?))
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        // Surface bad labels and levels at startup rather than on first use.
        settings.profile_table()?;
        settings.log_level()?;
        Ok(settings)
    }

    pub fn profile_table(&self) -> Result<ProfileTable, AppError> {
        Ok(ProfileTable::from_entries(&self.profiles)?)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::Message(format!("invalid log_level `{}`", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{ColorLabel, Roi};
    use config::FileFormat;

    #[test]
    fn defaults_carry_the_builtin_profiles() {
        let settings = Settings::from_builder(Settings::builder().unwrap()).unwrap();
        assert_eq!(settings.profile_table().unwrap(), ProfileTable::builtin());
        assert_eq!(settings.detection.scale_percent, 50);
        assert_eq!(settings.detection.scale_divisor, 120);
        assert_eq!(settings.detection.min_contour_area, 500.0);
        assert_eq!((settings.preview.width, settings.preview.height), (800, 600));
        assert_eq!(settings.log_level().unwrap(), Level::INFO);
    }

    #[test]
    fn file_source_overrides_individual_keys() {
        let toml = r#"
            log_level = "debug"

            [detection]
            min_contour_area = 800.0

            [profiles.yellow.roi]
            x = 10
        "#;
        let builder = Settings::builder()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(settings.log_level().unwrap(), Level::DEBUG);
        assert_eq!(settings.detection.min_contour_area, 800.0);
        let table = settings.profile_table().unwrap();
        assert_eq!(
            table.get(ColorLabel::Yellow).unwrap().roi,
            Roi::new(10, 680, 300, 300)
        );
        assert_eq!(
            table.get(ColorLabel::White).unwrap().roi,
            Roi::new(300, 15, 425, 200)
        );
    }

    #[test]
    fn unknown_profile_label_is_rejected() {
        let toml = r#"
            [profiles.green]
            bounds = { lower = [40, 50, 50], upper = [80, 255, 255] }
            roi = { x = 0, y = 0, width = 10, height = 10 }
        "#;
        let builder = Settings::builder()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        assert!(matches!(
            Settings::from_builder(builder),
            Err(AppError::Inspection(_))
        ));
    }

    #[test]
    fn unparsable_log_level_is_rejected_at_load() {
        let builder = Settings::builder()
            .unwrap()
            .add_source(File::from_str(r#"log_level = "chatty""#, FileFormat::Toml));
        assert!(matches!(
            Settings::from_builder(builder),
            Err(AppError::Config(ConfigError::Message(ref msg))) if msg.contains("chatty")
        ));
    }
}
