//! Configuration for the catalog validators.
//!
//! The only process-wide settings are the bounds the parameterized rules are
//! built with. They come from a file, an environment variable or the defaults,
//! pass through guard rails, and end up as a
//! [`ValidationBounds`](catalog_core::ValidationBounds).

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{ValidationConfig, ValidationConfigSource};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
