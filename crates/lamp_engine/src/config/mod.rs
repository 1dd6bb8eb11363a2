//! Configuration system
//!
//! Lamp tuning lives in TOML or RON files so designers can adjust transition
//! feel without rebuilding.

pub use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::scene::light::{DEFAULT_LIGHT_COLOR, DEFAULT_LIGHT_INTENSITY, DEFAULT_LIGHT_RANGE};
use crate::scene::SpotLight;
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&contents, format)
    }

    /// Parse configuration from a string in the given format
    fn from_str_with_format(contents: &str, format: Format) -> Result<Self, ConfigError> {
        match format {
            Format::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize configuration to a string in the given format
    fn to_string_with_format(&self, format: Format) -> Result<String, ConfigError> {
        match format {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_with_format(Format::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// TOML (`.toml`)
    Toml,
    /// Rusty Object Notation (`.ron`)
    Ron,
}

impl Format {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Parameters of a light created when a lamp is added without one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultLightConfig {
    /// Packed `0xRRGGBB` color
    pub color: u32,
    /// Target "on" intensity
    pub intensity: f32,
    /// Light range
    pub range: f32,
}

impl Default for DefaultLightConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_LIGHT_COLOR,
            intensity: DEFAULT_LIGHT_INTENSITY,
            range: DEFAULT_LIGHT_RANGE,
        }
    }
}

impl DefaultLightConfig {
    /// Build the light these parameters describe
    pub fn build(&self) -> SpotLight {
        SpotLight::from_hex(self.color, self.intensity, self.range)
    }
}

/// Lamp transition tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    /// Seconds to fade in when switched on
    pub heat_up_time: f32,
    /// Seconds to fade out when switched off
    pub cool_down_time: f32,
    /// Curve used when switching on
    pub ease_on: Easing,
    /// Curve used when switching off
    pub ease_off: Easing,
    /// Light used for lamps added without one
    pub default_light: DefaultLightConfig,
}

/// Default heat-up duration in seconds
pub const DEFAULT_HEAT_UP_TIME: f32 = 0.8;

/// Default cool-down duration in seconds
pub const DEFAULT_COOL_DOWN_TIME: f32 = 1.0;

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            heat_up_time: DEFAULT_HEAT_UP_TIME,
            cool_down_time: DEFAULT_COOL_DOWN_TIME,
            ease_on: Easing::ease_out_elastic(),
            ease_off: Easing::ease_out_quint(),
            default_light: DefaultLightConfig::default(),
        }
    }
}

impl Config for LampConfig {}

impl LampConfig {
    /// Check that durations and light parameters are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration("heat_up_time", self.heat_up_time)?;
        check_duration("cool_down_time", self.cool_down_time)?;
        check_easing("ease_on", self.ease_on)?;
        check_easing("ease_off", self.ease_off)?;
        if !self.default_light.intensity.is_finite() || self.default_light.intensity < 0.0 {
            return Err(ConfigError::Invalid {
                field: "default_light.intensity",
                reason: format!("{} is not a non-negative number", self.default_light.intensity),
            });
        }
        if !self.default_light.range.is_finite() || self.default_light.range <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "default_light.range",
                reason: format!("{} is not a positive number", self.default_light.range),
            });
        }
        Ok(())
    }

    /// Load and validate a lamp configuration file
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

fn check_duration(field: &'static str, seconds: f32) -> Result<(), ConfigError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{seconds} is not a non-negative duration"),
        })
    }
}

fn check_easing(field: &'static str, easing: Easing) -> Result<(), ConfigError> {
    match easing {
        Easing::OutElastic { amplitude, period } if !amplitude.is_finite() || !period.is_finite() => {
            Err(ConfigError::Invalid {
                field,
                reason: format!("elastic amplitude {amplitude} and period {period} must be finite"),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lamp_defaults() {
        let config = LampConfig::default();
        assert_eq!(config.heat_up_time, 0.8);
        assert_eq!(config.cool_down_time, 1.0);
        assert_eq!(config.ease_on, Easing::ease_out_elastic());
        assert_eq!(config.ease_off, Easing::OutQuint);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            heat_up_time = 0.25
            ease_off = "linear"

            [default_light]
            color = 0xff8800
        "#;
        let config = LampConfig::from_str_with_format(toml, Format::Toml).unwrap();
        assert_eq!(config.heat_up_time, 0.25);
        assert_eq!(config.cool_down_time, DEFAULT_COOL_DOWN_TIME);
        assert_eq!(config.ease_off, Easing::Linear);
        assert_eq!(config.ease_on, Easing::ease_out_elastic());
        assert_eq!(config.default_light.color, 0xff8800);
        assert_eq!(config.default_light.range, DEFAULT_LIGHT_RANGE);
    }

    #[test]
    fn test_ron_elastic_parameters() {
        let ron = "(ease_on: out_elastic(amplitude: 1.5, period: 0.4), cool_down_time: 2.0)";
        let config = LampConfig::from_str_with_format(ron, Format::Ron).unwrap();
        assert_eq!(config.ease_on, Easing::OutElastic { amplitude: 1.5, period: 0.4 });
        assert_eq!(config.cool_down_time, 2.0);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut config = LampConfig::default();
        config.ease_on = Easing::OutQuad;
        config.ease_off = Easing::OutCubic;
        let text = config.to_string_with_format(Format::Toml).unwrap();
        let parsed = LampConfig::from_str_with_format(&text, Format::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("lamp_config_{}.ron", std::process::id()));
        let mut config = LampConfig::default();
        config.heat_up_time = 1.5;
        config.save_to_file(&path).unwrap();

        let loaded = LampConfig::load_validated(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = LampConfig::default();
        config.cool_down_time = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "cool_down_time", .. })
        ));

        let mut config = LampConfig::default();
        config.heat_up_time = f32::NAN;
        assert!(config.validate().is_err());

        let ron = "(ease_on: out_elastic(amplitude: NaN, period: 0.3))";
        let config = LampConfig::from_str_with_format(ron, Format::Ron).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "ease_on", .. })
        ));

        let mut config = LampConfig::default();
        config.ease_off = Easing::OutElastic { amplitude: 1.0, period: f32::INFINITY };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "ease_off", .. })
        ));

        let mut config = LampConfig::default();
        config.default_light.range = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "default_light.range", .. })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = LampConfig::load_from_file("lamps.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = LampConfig::from_str_with_format("heat_up_time = \"slow\"", Format::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
