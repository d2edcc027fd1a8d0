//! A Rust library for inferring family relationships (father, mother,
//! mate) among household survey records from partial linkage hints.

pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ResolverConfig;
pub use error::{GenogramError, Result};

// Accessor contract and reference record
pub use common::traits::{MateIds, PersonDetail};
pub use models::{PersonRecord, PersonRecordAccessor, Sex};

// Resolution
pub use algorithm::genogram::{
    GenogramProcess, HouseholdGenogram, Relation, RelationResolver, ResolutionSummary, Tier,
};

// File helpers
pub use loader::{read_persons, write_persons};
