//! Unified error type for the poster-tone public API.
//!
//! [`ToneError`] covers every failure of table construction and application
//! and wraps the palette errors for convenient `?` propagation.

use std::fmt;

use crate::color::Rgb;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the poster-tone public API.
///
/// # Example
///
/// ```
/// use poster_tone::{PosterPalette, ToneError};
///
/// fn custom_palette() -> Result<PosterPalette, ToneError> {
///     let palette = PosterPalette::from_hex("#000", "#f00", "#888", "#fff")?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ToneError {
    /// The histogram has no entries or covers zero pixels
    EmptyInput,
    /// A gradient whose end color is not brighter than its start color
    DegenerateGradient {
        /// Gradient start color
        src: Rgb,
        /// Gradient end color
        dst: Rgb,
    },
    /// An intensity present in the image has no color table entry
    MissingTableEntry {
        /// The intensity that could not be looked up
        intensity: u8,
    },
    /// A band threshold outside `[0, 100)`
    InvalidThreshold {
        /// Which threshold (`"dark"` or `"accent"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Pixel buffer length disagrees with the stated dimensions
    DimensionMismatch {
        /// Buffer length
        len: usize,
        /// Stated width
        width: usize,
        /// Stated height
        height: usize,
    },
    /// Palette validation error
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::EmptyInput => write!(f, "intensity histogram is empty"),
            ToneError::DegenerateGradient { src, dst } => write!(
                f,
                "degenerate gradient: {} is not brighter than {}",
                dst, src
            ),
            ToneError::MissingTableEntry { intensity } => {
                write!(f, "no color table entry for intensity {}", intensity)
            }
            ToneError::InvalidThreshold { name, value } => write!(
                f,
                "{} threshold {} is outside the range [0, 100)",
                name, value
            ),
            ToneError::DimensionMismatch { len, width, height } => {
                match width.checked_mul(*height) {
                    Some(needed) => write!(
                        f,
                        "pixel buffer holds {} values but {}x{} needs {}",
                        len, width, height, needed
                    ),
                    None => write!(
                        f,
                        "pixel buffer holds {} values but {}x{} overflows usize",
                        len, width, height
                    ),
                }
            }
            ToneError::Palette(err) => write!(f, "palette error: {}", err),
            ToneError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for ToneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToneError::Palette(err) => Some(err),
            ToneError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for ToneError {
    fn from(err: PaletteError) -> Self {
        ToneError::Palette(err)
    }
}

impl From<ParseColorError> for ToneError {
    fn from(err: ParseColorError) -> Self {
        ToneError::ParseColor(err)
    }
}
