//! Color types and tone math
//!
//! - [`Rgb`]: 8-bit sRGB byte triple used for palette entries and output pixels
//! - [`luminance`]: perceived brightness used to normalise the gradient
//! - [`Gradient`]: square-root eased blend between two palette tones
//!
//! # Example
//!
//! ```
//! use poster_tone::{Gradient, PosterPalette};
//!
//! let palette = PosterPalette::HOPE;
//! let gradient = Gradient::new(palette.mid, palette.highlight).unwrap();
//!
//! // The anchor itself maps to the start color
//! assert_eq!(gradient.at(120, 120), palette.mid);
//! ```

mod gradient;
mod rgb;

pub use gradient::{interpolate, luminance, Gradient};
pub use rgb::Rgb;
