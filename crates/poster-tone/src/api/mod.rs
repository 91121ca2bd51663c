//! Public API for the poster-tone crate.
//!
//! This module provides the high-level API: [`PosterMapper`] builder and
//! [`ToneError`] unified error type.

mod builder;
mod error;

pub use builder::PosterMapper;
pub use error::ToneError;
