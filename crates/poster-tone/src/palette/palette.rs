//! The four-tone poster palette.

use super::error::PaletteError;
use crate::color::{Gradient, Rgb};

/// The four tones of a poster rendering.
///
/// Tones are assigned by brightness band, darkest first:
///
/// | Tone | Band | Default |
/// |------|------|---------|
/// | `dark` | flat fill for the darkest band | `#00314c` |
/// | `accent` | flat fill for the second band | `#d71a20` |
/// | `mid` | gradient start, at the gradient anchor | `#70969f` |
/// | `highlight` | gradient end, eased towards by brighter values | `#fce4a8` |
///
/// # Example
///
/// ```
/// use poster_tone::{PosterPalette, Rgb};
///
/// let palette = PosterPalette::default();
/// assert_eq!(palette.accent, Rgb::new(0xd7, 0x1a, 0x20));
///
/// let custom = PosterPalette::from_hex("#000", "#f00", "#888", "#fff").unwrap();
/// assert_eq!(custom.highlight, Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterPalette {
    /// Flat color of the darkest band
    pub dark: Rgb,
    /// Flat color of the accent band
    pub accent: Rgb,
    /// Gradient start color
    pub mid: Rgb,
    /// Gradient end color
    pub highlight: Rgb,
}

impl PosterPalette {
    /// The classic campaign-poster palette.
    pub const HOPE: Self = Self {
        dark: Rgb::new(0x00, 0x31, 0x4c),
        accent: Rgb::new(0xd7, 0x1a, 0x20),
        mid: Rgb::new(0x70, 0x96, 0x9f),
        highlight: Rgb::new(0xfc, 0xe4, 0xa8),
    };

    /// Create a palette from four tones.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DegenerateGradient`] unless `highlight` is
    /// strictly brighter than `mid`.
    pub fn new(dark: Rgb, accent: Rgb, mid: Rgb, highlight: Rgb) -> Result<Self, PaletteError> {
        let palette = Self {
            dark,
            accent,
            mid,
            highlight,
        };
        palette.gradient()?;
        Ok(palette)
    }

    /// Create a palette from four hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] naming the first tone that fails
    /// to parse, or [`PaletteError::DegenerateGradient`].
    pub fn from_hex(
        dark: &str,
        accent: &str,
        mid: &str,
        highlight: &str,
    ) -> Result<Self, PaletteError> {
        fn parse(tone: &'static str, hex: &str) -> Result<Rgb, PaletteError> {
            hex.parse()
                .map_err(|source| PaletteError::ParseColor { tone, source })
        }

        Self::new(
            parse("dark", dark)?,
            parse("accent", accent)?,
            parse("mid", mid)?,
            parse("highlight", highlight)?,
        )
    }

    /// The mid → highlight gradient used for the brightest band.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DegenerateGradient`] for palettes built by
    /// struct literal whose highlight is not brighter than the mid tone.
    pub fn gradient(&self) -> Result<Gradient, PaletteError> {
        Gradient::new(self.mid, self.highlight).map_err(|_| PaletteError::DegenerateGradient {
            mid: self.mid,
            highlight: self.highlight,
        })
    }
}

impl Default for PosterPalette {
    fn default() -> Self {
        Self::HOPE
    }
}
