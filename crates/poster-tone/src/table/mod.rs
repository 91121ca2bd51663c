//! Histogram classification into poster bands.
//!
//! [`ColorTableBuilder`] walks an [`IntensityHistogram`](crate::IntensityHistogram)
//! once, from darkest to brightest, and produces:
//!
//! - a [`ColorTable`] mapping each observed intensity to its final color
//! - a [`BandReport`] with the share of the image each band received

mod builder;
mod color_table;
mod report;

pub use builder::{ColorTableBuilder, Thresholds};
pub use color_table::{Band, ColorTable, TableEntry};
pub use report::BandReport;
