//! PosterMapper builder -- the primary entry point for the crate.
//!
//! [`PosterMapper`] wraps histogram extraction, table construction and table
//! application behind a small fluent configuration.

use crate::api::ToneError;
use crate::apply::apply_table;
use crate::histogram::IntensityHistogram;
use crate::output::PosterImage;
use crate::palette::PosterPalette;
use crate::table::{BandReport, ColorTable, ColorTableBuilder, Thresholds};

/// High-level poster mapping builder.
///
/// - Configuration methods consume and return `self`
/// - Thresholds are validated when mapping, not when set
/// - [`map()`](Self::map) takes `&self`, so one mapper serves many images
///
/// # Example
///
/// ```
/// use poster_tone::{PosterMapper, PosterPalette};
///
/// let mapper = PosterMapper::new(PosterPalette::HOPE)
///     .dark_threshold(20.0)
///     .accent_threshold(50.0);
///
/// let luma = vec![5, 60, 120, 200];
/// let poster = mapper.map(&luma, 2, 2).unwrap();
///
/// assert_eq!(poster.width(), 2);
/// assert_eq!(poster.rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct PosterMapper {
    palette: PosterPalette,
    dark_threshold: f64,
    accent_threshold: f64,
}

impl PosterMapper {
    /// Create a mapper with default thresholds (15% dark, 50% accent).
    pub fn new(palette: PosterPalette) -> Self {
        Self {
            palette,
            dark_threshold: Thresholds::DEFAULT_DARK,
            accent_threshold: Thresholds::DEFAULT_ACCENT,
        }
    }

    /// Set the dark band threshold (percent of image area).
    #[inline]
    pub fn dark_threshold(mut self, percent: f64) -> Self {
        self.dark_threshold = percent;
        self
    }

    /// Set the accent band threshold (percent of image area).
    #[inline]
    pub fn accent_threshold(mut self, percent: f64) -> Self {
        self.accent_threshold = percent;
        self
    }

    /// The palette in use.
    #[inline]
    pub fn palette(&self) -> &PosterPalette {
        &self.palette
    }

    /// Validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::InvalidThreshold`] for values outside `[0, 100)`.
    pub fn thresholds(&self) -> Result<Thresholds, ToneError> {
        Thresholds::new(self.dark_threshold, self.accent_threshold)
    }

    /// Classify a histogram without touching any pixels.
    pub fn build_table(
        &self,
        histogram: &IntensityHistogram,
    ) -> Result<(ColorTable, BandReport), ToneError> {
        ColorTableBuilder::new(&self.palette, self.thresholds()?).build(histogram)
    }

    /// Map a row-major luma buffer to a poster image.
    ///
    /// # Errors
    ///
    /// - [`ToneError::DimensionMismatch`] if `luma.len() != width * height`
    /// - [`ToneError::InvalidThreshold`], [`ToneError::EmptyInput`] or
    ///   [`ToneError::DegenerateGradient`] from table construction
    pub fn map(&self, luma: &[u8], width: usize, height: usize) -> Result<PosterImage, ToneError> {
        if width.checked_mul(height) != Some(luma.len()) {
            return Err(ToneError::DimensionMismatch {
                len: luma.len(),
                width,
                height,
            });
        }

        let histogram = IntensityHistogram::from_luma(luma);
        let (table, report) = self.build_table(&histogram)?;
        let rgb = apply_table(&table, luma)?;

        Ok(PosterImage::new(rgb, width, height, table, report))
    }
}

impl Default for PosterMapper {
    fn default() -> Self {
        Self::new(PosterPalette::default())
    }
}
