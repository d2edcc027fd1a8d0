//! Family relationship inference for household survey records
//!
//! This module fills in father, mother and mate links on a population of
//! person records from the partial hints transcribed on each record. It
//! includes:
//!
//! 1. Preparation: household and identifier indexes over the population
//! 2. A tiered resolver shared by all three relation kinds
//! 3. The orchestrating pass and its summary statistics
//!
//! Matching is exact and rule based. Candidates found by transcribed
//! identifier may live anywhere in the population; candidates found by name
//! must share the person's household.

pub mod preparation;
pub mod process;
pub mod relation;
pub mod resolver;
pub mod statistics;

// Re-export key types
pub use preparation::{
    HouseholdIndex, HouseholdKey, IdentifierIndex, PreparedPerson, PreparedPopulation,
    group_by_household, prepare,
};
pub use process::{GenogramProcess, HouseholdGenogram};
pub use relation::Relation;
pub use resolver::{RelationResolver, Tier};
pub use statistics::{RelationCounts, ResolutionSummary};
