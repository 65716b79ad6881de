//! Configuration functionality
//!
//! This module contains the application settings and the functions for
//! loading them from a YAML file.

mod loader;
mod model;

pub use loader::{load_settings, read_or_create};
pub use model::Settings;
