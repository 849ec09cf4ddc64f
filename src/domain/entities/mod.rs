//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod developer;

pub use developer::{Developer, DeveloperSearch, Enrichment, SortKey};
