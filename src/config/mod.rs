//! Configuration module for content fetching
//!
//! Split into focused submodules:
//! - `types`: the main `ContentConfig` struct
//! - `builder`: type-safe builder with compile-time required fields
//! - `getters`: read accessors

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::ContentConfigBuilder;
pub use types::ContentConfig;
