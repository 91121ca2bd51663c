//! Palette types and utilities
//!
//! This module provides the four-tone [`PosterPalette`] together with
//! error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::PosterPalette;
