//! Shared data models.

pub mod schema;

// Re-export commonly used types
pub use schema::{is_system_database, DatabaseSchema, ServerListing, SYSTEM_DATABASES};
