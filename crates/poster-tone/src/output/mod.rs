//! Output types for the mapping pipeline.
//!
//! [`PosterImage`] is the canonical result of [`PosterMapper::map`](crate::PosterMapper::map).

mod poster_image;

pub use poster_image::PosterImage;
