//! Learning-module content for learnpath-patch.
//!
//! - [`schema`]: the module and unit records that get appended
//! - [`catalog`]: the ordered list of language codes and their modules
//! - [`render`]: TypeScript object-literal text for a module

pub mod catalog;
pub mod error;
pub mod render;
pub mod schema;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use render::{render_module, ts_string};
pub use schema::{LearningModule, Unit};
