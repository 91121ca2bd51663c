//! Obamafy - four-tone campaign poster rendering
//!
//! Turns a photograph into a poster using a dark, an accent, a mid and a
//! highlight tone. The tone mapping itself lives in the `poster-tone` crate;
//! this crate adds configuration, preprocessing, PNG output and the CLI.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
