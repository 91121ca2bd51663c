//! Share of image area per band, for diagnostics.

use std::fmt;

/// Percentage of the image area that ended up in each band.
///
/// The report is informational only; it never feeds back into the table.
/// Bands the scan never reached report `0.0`, and the three figures always
/// sum to 100.
///
/// # Example
///
/// ```
/// use poster_tone::BandReport;
///
/// let report = BandReport { dark: 50.0, accent: 30.0, rest: 20.0 };
/// assert_eq!(
///     report.to_string(),
///     "dark: 50.00%\naccent: 30.00%\nthe rest: 20.00%"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandReport {
    /// Area mapped to the dark tone
    pub dark: f64,
    /// Area mapped to the accent tone
    pub accent: f64,
    /// Area covered by the gradient
    pub rest: f64,
}

impl BandReport {
    /// Sum of all three shares.
    #[inline]
    pub fn total(&self) -> f64 {
        self.dark + self.accent + self.rest
    }
}

impl fmt::Display for BandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dark: {:.2}%", self.dark)?;
        writeln!(f, "accent: {:.2}%", self.accent)?;
        write!(f, "the rest: {:.2}%", self.rest)
    }
}
