//! Configuration for relationship resolution.

use chrono::NaiveDate;
use std::fmt;

/// Configuration for the genogram resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// A father or mother found by name must be strictly older than this
    pub parent_min_age: u32,
    /// Largest accepted age difference between a person and a mate found by name
    pub mate_max_age_gap: u32,
    /// Draw a progress bar over the resolution tiers
    pub show_progress: bool,
    /// Date at which ages are derived from birth dates when no age is recorded.
    /// `None` means today.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            parent_min_age: 15,
            mate_max_age_gap: 5,
            show_progress: false,
            reference_date: None,
        }
    }
}

impl ResolverConfig {
    /// Whether `age` is old enough for a father or mother matched by name
    #[must_use]
    pub const fn is_parent_age(&self, age: u32) -> bool {
        age > self.parent_min_age
    }

    /// Whether two ages are close enough for a mate matched by name
    #[must_use]
    pub const fn is_mate_age(&self, age: u32, other: u32) -> bool {
        age.abs_diff(other) <= self.mate_max_age_gap
    }
}

impl fmt::Display for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolver Configuration:")?;
        writeln!(f, "  Parent Minimum Age: > {}", self.parent_min_age)?;
        writeln!(f, "  Mate Maximum Age Gap: {}", self.mate_max_age_gap)?;
        if let Some(date) = self.reference_date {
            writeln!(f, "  Reference Date: {date}")?;
        }
        writeln!(f, "  Show Progress: {}", self.show_progress)?;
        Ok(())
    }
}
