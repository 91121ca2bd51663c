//! Intensity histogram of a single-channel image.
//!
//! The histogram lists each intensity that actually occurs together with its
//! pixel count, sorted ascending by intensity. It is the only view of the
//! image the color table builder ever sees; pixel positions play no part.

/// One histogram bin: how many pixels have `intensity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    /// Number of pixels with this intensity (always > 0)
    pub count: u64,
    /// The intensity value
    pub intensity: u8,
}

/// Sorted, de-duplicated histogram of the intensities present in an image.
///
/// # Example
///
/// ```
/// use poster_tone::IntensityHistogram;
///
/// let histogram = IntensityHistogram::from_luma(&[200, 5, 5, 60]);
/// let intensities: Vec<u8> = histogram.entries().iter().map(|e| e.intensity).collect();
///
/// assert_eq!(intensities, vec![5, 60, 200]);
/// assert_eq!(histogram.total_area(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntensityHistogram {
    entries: Vec<HistogramEntry>,
    total_area: u64,
}

impl IntensityHistogram {
    /// Count every intensity in a luma buffer.
    pub fn from_luma(luma: &[u8]) -> Self {
        let mut bins = [0u64; 256];
        for &value in luma {
            bins[value as usize] += 1;
        }
        Self::from_bins(&bins)
    }

    /// Build from `(count, intensity)` pairs in any order.
    ///
    /// Pairs sharing an intensity are merged and zero counts are dropped, so
    /// the result upholds the same invariants as [`from_luma`](Self::from_luma).
    /// Counts saturate at `u64::MAX`.
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, u8)>,
    {
        let mut bins = [0u64; 256];
        for (count, intensity) in pairs {
            let bin = &mut bins[intensity as usize];
            *bin = bin.saturating_add(count);
        }
        Self::from_bins(&bins)
    }

    fn from_bins(bins: &[u64; 256]) -> Self {
        let entries: Vec<HistogramEntry> = bins
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(intensity, &count)| HistogramEntry {
                count,
                intensity: intensity as u8,
            })
            .collect();
        // Saturates rather than wraps for pathological counts
        let total_area = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.count));

        Self {
            entries,
            total_area,
        }
    }

    /// Entries ascending by intensity.
    #[inline]
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Total number of pixels covered.
    #[inline]
    pub fn total_area(&self) -> u64 {
        self.total_area
    }

    /// Number of distinct intensities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no intensity is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_saturates_huge_counts() {
        let histogram = IntensityHistogram::from_entries([(u64::MAX, 1), (1, 1), (5, 2)]);
        assert_eq!(histogram.entries()[0].count, u64::MAX);
        assert_eq!(histogram.total_area(), u64::MAX);
    }

    #[test]
    fn test_from_luma_counts_and_sorts() {
        let histogram = IntensityHistogram::from_luma(&[9, 3, 9, 9, 255, 0]);
        assert_eq!(
            histogram.entries(),
            &[
                HistogramEntry {
                    count: 1,
                    intensity: 0
                },
                HistogramEntry {
                    count: 1,
                    intensity: 3
                },
                HistogramEntry {
                    count: 3,
                    intensity: 9
                },
                HistogramEntry {
                    count: 1,
                    intensity: 255
                },
            ]
        );
        assert_eq!(histogram.total_area(), 6);
    }

    #[test]
    fn test_from_entries_merges_and_drops_zero() {
        let histogram =
            IntensityHistogram::from_entries([(20, 200), (10, 5), (0, 77), (5, 200)]);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.entries()[0].intensity, 5);
        assert_eq!(histogram.entries()[1].count, 25);
        assert_eq!(histogram.total_area(), 35);
    }

    #[test]
    fn test_empty() {
        let histogram = IntensityHistogram::from_luma(&[]);
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_area(), 0);
    }

    #[test]
    fn test_counts_sum_to_area() {
        let luma: Vec<u8> = (0..1000u32).map(|i| (i * 37 % 256) as u8).collect();
        let histogram = IntensityHistogram::from_luma(&luma);
        let sum: u64 = histogram.entries().iter().map(|e| e.count).sum();
        assert_eq!(sum, histogram.total_area());
        assert!(histogram
            .entries()
            .windows(2)
            .all(|w| w[0].intensity < w[1].intensity));
    }
}
