//! PosterImage: mapped RGB pixels plus the table and report behind them.

use crate::table::{BandReport, ColorTable};

/// The output of [`PosterMapper::map`](crate::PosterMapper::map).
///
/// Holds the RGB buffer in row-major `[R, G, B, ...]` order together with
/// the color table that produced it and the band report.
#[derive(Debug, Clone)]
pub struct PosterImage {
    rgb: Vec<u8>,
    width: usize,
    height: usize,
    table: ColorTable,
    report: BandReport,
}

impl PosterImage {
    /// Assemble a poster image.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `rgb.len() == width * height * 3`.
    pub fn new(
        rgb: Vec<u8>,
        width: usize,
        height: usize,
        table: ColorTable,
        report: BandReport,
    ) -> Self {
        debug_assert_eq!(
            rgb.len(),
            width * height * 3,
            "rgb length ({}) must match width * height * 3 ({}x{}x3)",
            rgb.len(),
            width,
            height,
        );
        Self {
            rgb,
            width,
            height,
            table,
            report,
        }
    }

    /// RGB bytes, three per pixel.
    #[inline]
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Take ownership of the RGB bytes.
    #[inline]
    pub fn into_rgb(self) -> Vec<u8> {
        self.rgb
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The table used to color this image.
    #[inline]
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Share of the image area per band.
    #[inline]
    pub fn report(&self) -> &BandReport {
        &self.report
    }
}
