//! File access for learnpath-patch
//!
//! Whole-file text reads, locked atomic writes, and extension-driven
//! loading of serde documents.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
