//! Single forward pass that turns a histogram into a [`ColorTable`].
//!
//! # Classification
//!
//! Intensities are visited from darkest to brightest. For each one the
//! builder knows `percent`, the share of the image covered by all *darker*
//! intensities, and decides its color from the current phase:
//!
//! ```text
//! Anchor ──(always)──> Dark ──(percent >= dark)──> Accent ──(percent >= accent)──> Gradient
//!   dark                dark       accent              accent        mid (anchor)     eased
//! ```
//!
//! The value that trips a transition takes the color of the band it moves
//! into. Transitions only go forward, so band assignment is monotonic in
//! intensity even when later percentages would satisfy an earlier condition.

use super::color_table::{Band, ColorTable, TableEntry};
use super::report::BandReport;
use crate::api::ToneError;
use crate::color::Gradient;
use crate::histogram::{HistogramEntry, IntensityHistogram};
use crate::palette::PosterPalette;

/// Band thresholds as percentages of the total image area.
///
/// `dark` ends the dark fill once that much area lies below the current
/// intensity; `accent` ends the accent fill the same way, measured against
/// the same running total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    dark: f64,
    accent: f64,
}

impl Thresholds {
    /// Default share below which values stay dark.
    pub const DEFAULT_DARK: f64 = 15.0;
    /// Default share below which values stay accent.
    pub const DEFAULT_ACCENT: f64 = 50.0;

    /// Create validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::InvalidThreshold`] if either value is outside
    /// `[0, 100)` or not a number.
    pub fn new(dark: f64, accent: f64) -> Result<Self, ToneError> {
        Ok(Self {
            dark: check_threshold("dark", dark)?,
            accent: check_threshold("accent", accent)?,
        })
    }

    /// Dark band threshold (percent).
    #[inline]
    pub fn dark(&self) -> f64 {
        self.dark
    }

    /// Accent band threshold (percent).
    #[inline]
    pub fn accent(&self) -> f64 {
        self.accent
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dark: Self::DEFAULT_DARK,
            accent: Self::DEFAULT_ACCENT,
        }
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<f64, ToneError> {
    if (0.0..100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ToneError::InvalidThreshold { name, value })
    }
}

/// Builds a [`ColorTable`] and [`BandReport`] from an intensity histogram.
///
/// # Example
///
/// ```
/// use poster_tone::{Band, ColorTableBuilder, IntensityHistogram, PosterPalette, Thresholds};
///
/// let histogram = IntensityHistogram::from_entries([(10, 5), (40, 60), (30, 120), (20, 200)]);
/// let palette = PosterPalette::HOPE;
/// let thresholds = Thresholds::new(20.0, 50.0).unwrap();
///
/// let (table, report) = ColorTableBuilder::new(&palette, thresholds)
///     .build(&histogram)
///     .unwrap();
///
/// assert_eq!(table.lookup(120).unwrap(), palette.accent);
/// assert_eq!(table.get(200).unwrap().band, Band::Gradient);
/// assert_eq!((report.dark, report.accent, report.rest), (50.0, 30.0, 20.0));
/// ```
#[derive(Debug, Clone)]
pub struct ColorTableBuilder<'a> {
    palette: &'a PosterPalette,
    thresholds: Thresholds,
}

impl<'a> ColorTableBuilder<'a> {
    /// Create a builder for `palette` with the given thresholds.
    #[inline]
    pub fn new(palette: &'a PosterPalette, thresholds: Thresholds) -> Self {
        Self {
            palette,
            thresholds,
        }
    }

    /// Classify every histogram entry.
    ///
    /// # Errors
    ///
    /// - [`ToneError::EmptyInput`] if the histogram covers no pixels
    /// - [`ToneError::DegenerateGradient`] if the palette's highlight is not
    ///   brighter than its mid tone
    pub fn build(
        &self,
        histogram: &IntensityHistogram,
    ) -> Result<(ColorTable, BandReport), ToneError> {
        if histogram.is_empty() || histogram.total_area() == 0 {
            return Err(ToneError::EmptyInput);
        }
        let gradient = Gradient::new(self.palette.mid, self.palette.highlight)?;

        let mut cursor = Cursor::new(
            self.palette,
            gradient,
            self.thresholds,
            histogram.total_area(),
        );
        let mut table = ColorTable::new();
        for entry in histogram.entries() {
            let classified = cursor.classify(entry);
            table.insert(entry.intensity, classified);
        }

        Ok((table, cursor.finish()))
    }
}

/// Where the scan currently is. Variants only ever advance downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Nothing classified yet
    Anchor,
    /// Filling with the dark tone
    Dark,
    /// Filling with the accent tone; `residue` is the dark band's share
    Accent { residue: f64 },
    /// Easing from mid to highlight, starting at intensity `base`
    Gradient { base: u8 },
}

/// Scan state, local to one [`ColorTableBuilder::build`] call.
struct Cursor<'a> {
    palette: &'a PosterPalette,
    gradient: Gradient,
    thresholds: Thresholds,
    phase: Phase,
    total_area: u64,
    covered: u64,
    dark_share: f64,
    accent_share: f64,
}

impl<'a> Cursor<'a> {
    fn new(
        palette: &'a PosterPalette,
        gradient: Gradient,
        thresholds: Thresholds,
        total_area: u64,
    ) -> Self {
        Self {
            palette,
            gradient,
            thresholds,
            phase: Phase::Anchor,
            total_area,
            covered: 0,
            dark_share: 0.0,
            accent_share: 0.0,
        }
    }

    /// Share of the image strictly darker than the value being classified.
    fn percent(&self) -> f64 {
        100.0 * self.covered as f64 / self.total_area as f64
    }

    fn classify(&mut self, entry: &HistogramEntry) -> TableEntry {
        let percent = self.percent();

        let phase = self.phase;
        let (band, color) = match phase {
            Phase::Anchor => {
                self.phase = Phase::Dark;
                (Band::Darkest, self.palette.dark)
            }
            Phase::Dark if percent < self.thresholds.dark => (Band::Darkest, self.palette.dark),
            Phase::Dark => {
                self.dark_share = percent;
                self.phase = Phase::Accent { residue: percent };
                (Band::Accent, self.palette.accent)
            }
            Phase::Accent { .. } if percent < self.thresholds.accent => {
                (Band::Accent, self.palette.accent)
            }
            Phase::Accent { residue } => {
                self.accent_share = percent - residue;
                self.phase = Phase::Gradient {
                    base: entry.intensity,
                };
                (Band::Gradient, self.palette.mid)
            }
            Phase::Gradient { base } => (Band::Gradient, self.gradient.at(base, entry.intensity)),
        };

        self.covered += entry.count;
        TableEntry { band, color }
    }

    /// Close the band the scan ended in and produce the report.
    fn finish(self) -> BandReport {
        match self.phase {
            Phase::Anchor | Phase::Dark => BandReport {
                dark: 100.0,
                accent: 0.0,
                rest: 0.0,
            },
            Phase::Accent { residue } => BandReport {
                dark: residue,
                accent: 100.0 - residue,
                rest: 0.0,
            },
            Phase::Gradient { .. } => BandReport {
                dark: self.dark_share,
                accent: self.accent_share,
                rest: 100.0 - self.dark_share - self.accent_share,
            },
        }
    }
}
