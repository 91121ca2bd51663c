//! Intensity → color lookup table.

use crate::api::ToneError;
use crate::color::Rgb;

/// Classification band, in scan order.
///
/// The ordering `Darkest < Accent < Gradient` is the order in which the
/// builder enters the bands while walking intensities upwards. A band is
/// never re-entered once left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// Flat dark fill, always including the lowest intensity
    Darkest,
    /// Flat accent fill
    Accent,
    /// Mid → highlight gradient
    Gradient,
}

/// The color assigned to one intensity and the band that assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Band the intensity was classified into
    pub band: Band,
    /// Final output color
    pub color: Rgb,
}

/// Lookup table from intensity to final color.
///
/// Stored as 256 optional slots indexed by intensity. Only intensities seen
/// in the histogram the table was built from are populated; looking up any
/// other intensity is reported as [`ToneError::MissingTableEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    slots: [Option<TableEntry>; 256],
}

impl ColorTable {
    /// An empty table.
    pub fn new() -> Self {
        Self { slots: [None; 256] }
    }

    #[inline]
    pub(crate) fn insert(&mut self, intensity: u8, entry: TableEntry) {
        self.slots[intensity as usize] = Some(entry);
    }

    /// Entry for `intensity`, if it was classified.
    #[inline]
    pub fn get(&self, intensity: u8) -> Option<TableEntry> {
        self.slots[intensity as usize]
    }

    /// Output color for `intensity`.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::MissingTableEntry`] when the intensity was not
    /// part of the histogram.
    #[inline]
    pub fn lookup(&self, intensity: u8) -> Result<Rgb, ToneError> {
        self.get(intensity)
            .map(|entry| entry.color)
            .ok_or(ToneError::MissingTableEntry { intensity })
    }

    /// Populated entries, ascending by intensity.
    pub fn iter(&self) -> impl Iterator<Item = (u8, TableEntry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(intensity, slot)| slot.map(|entry| (intensity as u8, entry)))
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no intensity has an entry.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}
