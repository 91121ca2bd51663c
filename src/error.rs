use std::path::PathBuf;

use poster_tone::{PaletteError, ToneError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} threshold must be in [0, 100), got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Posterization must keep 1 to 8 bits, got {0}")]
    InvalidPosterization(u8),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Path \"{}\" does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Tone mapping error: {0}")]
    Tone(#[from] ToneError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
