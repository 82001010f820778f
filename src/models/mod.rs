//! Models module for the Online Store list view
//!
//! This module contains the typed record structures the renderers consume.

pub mod record;

// Re-export commonly used types
pub use record::{platform_from_integration_key, StoreRecord};
