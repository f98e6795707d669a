//! Kodi Collector Library
//!
//! Classifies TV show folders and episode files into records ready for
//! TMDB lookup and Kodi NFO generation.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
