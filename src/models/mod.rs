pub mod config;

pub use config::{odd_window, PaletteConfig, RenderConfig, RenderOverrides, CONFIG_ENV};
