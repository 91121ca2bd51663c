use std::path::Path;

use poster_tone::{PosterMapper, PosterPalette};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a YAML config file, used when `--config` is absent
pub const CONFIG_ENV: &str = "OBAMAFY_CONFIG";

/// Rendering configuration, loaded from YAML and refined by CLI flags
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Percent of image area below which values stay dark
    #[serde(default = "default_dark_threshold")]
    pub dark_threshold: f64,

    /// Percent of image area below which values take the accent tone
    #[serde(default = "default_accent_threshold")]
    pub accent_threshold: f64,

    /// Bits kept per channel by the posterize step
    #[serde(default = "default_posterization")]
    pub posterization: u8,

    /// Median filter window; even values are bumped to the next odd one
    #[serde(default = "default_median")]
    pub median: u32,

    /// Poster tones as hex strings
    #[serde(default)]
    pub palette: PaletteConfig,
}

fn default_dark_threshold() -> f64 {
    15.0
}

fn default_accent_threshold() -> f64 {
    50.0
}

fn default_posterization() -> u8 {
    3
}

fn default_median() -> u32 {
    5
}

/// Palette section of the config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub dark: String,
    pub accent: String,
    pub mid: String,
    pub highlight: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let hope = PosterPalette::HOPE;
        Self {
            dark: hope.dark.to_string(),
            accent: hope.accent.to_string(),
            mid: hope.mid.to_string(),
            highlight: hope.highlight.to_string(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOverrides {
    pub dark_threshold: Option<f64>,
    pub accent_threshold: Option<f64>,
    pub posterization: Option<u8>,
    pub median: Option<u32>,
}

/// Round an even median window up to the next odd size.
pub fn odd_window(window: u32) -> u32 {
    if window % 2 == 0 {
        window + 1
    } else {
        window
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            dark_threshold = config.dark_threshold,
            accent_threshold = config.accent_threshold,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use built-in defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, overrides: &RenderOverrides) -> Self {
        if let Some(value) = overrides.dark_threshold {
            self.dark_threshold = value;
        }
        if let Some(value) = overrides.accent_threshold {
            self.accent_threshold = value;
        }
        if let Some(value) = overrides.posterization {
            self.posterization = value;
        }
        if let Some(value) = overrides.median {
            self.median = value;
        }
        self
    }

    /// Check every field, so bad settings fail before any image work starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("dark", self.dark_threshold)?;
        check_threshold("accent", self.accent_threshold)?;
        if !(1..=8).contains(&self.posterization) {
            return Err(ConfigError::InvalidPosterization(self.posterization));
        }
        self.palette()?;
        Ok(())
    }

    /// Median window actually used by the blur step
    pub fn median_window(&self) -> u32 {
        odd_window(self.median)
    }

    /// Parsed and validated palette
    pub fn palette(&self) -> Result<PosterPalette, ConfigError> {
        let p = &self.palette;
        Ok(PosterPalette::from_hex(
            &p.dark,
            &p.accent,
            &p.mid,
            &p.highlight,
        )?)
    }

    /// Tone mapper configured from this config
    pub fn mapper(&self) -> Result<PosterMapper, ConfigError> {
        Ok(PosterMapper::new(self.palette()?)
            .dark_threshold(self.dark_threshold)
            .accent_threshold(self.accent_threshold))
    }
}

/// Validate a percentage threshold; shared with CLI argument parsing.
pub fn check_threshold(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dark_threshold: default_dark_threshold(),
            accent_threshold: default_accent_threshold(),
            posterization: default_posterization(),
            median: default_median(),
            palette: PaletteConfig::default(),
        }
    }
}
