#![allow(clippy::module_inception)]

//! poster-tone: four-tone poster color mapping
//!
//! This library turns a single-channel intensity image into a stylized
//! poster using a fixed set of four tones: a dark tone, an accent tone, and a
//! mid → highlight gradient. The mapping is a pure function of the image's
//! intensity histogram; pixel positions are never consulted.
//!
//! # Quick Start
//!
//! The [`PosterMapper`] builder is the primary entry point:
//!
//! ```
//! use poster_tone::{PosterMapper, PosterPalette};
//!
//! let mapper = PosterMapper::new(PosterPalette::HOPE);
//! let luma = vec![0, 64, 128, 255];
//! let poster = mapper.map(&luma, 2, 2).unwrap();
//!
//! assert_eq!(poster.rgb().len(), 12);
//! println!("{}", poster.report());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! luma pixels
//!     |
//!     v
//! IntensityHistogram      (count per observed intensity, ascending)
//!     |
//!     v
//! ColorTableBuilder       (single forward pass, sequential)
//!     |
//!     +---> BandReport    (diagnostics only)
//!     v
//! ColorTable              (frozen, 256 optional slots)
//!     |
//!     v
//! apply_table             (parallel per-pixel lookup)
//!     |
//!     v
//! PosterImage             (RGB bytes)
//! ```
//!
//! # Bands
//!
//! Walking intensities from dark to bright, the builder tracks how much of
//! the image lies below the current value:
//!
//! - The lowest intensity is always the dark tone.
//! - Values stay dark while less than `dark_threshold` percent lies below.
//! - The next values take the accent tone while less than
//!   `accent_threshold` percent lies below.
//! - The first value past that becomes the gradient anchor and takes the mid
//!   tone. Every brighter value is eased towards the highlight with a
//!   square-root curve normalised by the two tones' [`luminance`] gap.
//!
//! Band assignment never goes backwards.

pub mod api;
pub mod apply;
pub mod color;
pub mod histogram;
pub mod output;
pub mod palette;
pub mod table;


pub use api::{PosterMapper, ToneError};
pub use apply::apply_table;
pub use color::{interpolate, luminance, Gradient, Rgb};
pub use histogram::{HistogramEntry, IntensityHistogram};
pub use output::PosterImage;
pub use palette::{PaletteError, ParseColorError, PosterPalette};
pub use table::{Band, BandReport, ColorTable, ColorTableBuilder, TableEntry, Thresholds};
