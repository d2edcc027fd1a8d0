//! Summary statistics for a resolution run

use std::fmt;
use std::time::Duration;

use super::relation::Relation;
use super::resolver::Tier;

/// Links committed for one relation, per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationCounts {
    pub by_id: usize,
    pub by_name: usize,
    pub by_first_name: usize,
}

impl RelationCounts {
    /// Build from per-tier counts in precedence order
    #[must_use]
    pub const fn from_tiers([by_id, by_name, by_first_name]: [usize; 3]) -> Self {
        Self {
            by_id,
            by_name,
            by_first_name,
        }
    }

    #[must_use]
    pub const fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::ById => self.by_id,
            Tier::ByName => self.by_name,
            Tier::ByFirstName => self.by_first_name,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.by_id + self.by_name + self.by_first_name
    }
}

/// Outcome of one resolution run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Records handed to the run
    pub records: usize,
    /// Records with both catchment code and household number
    pub prepared: usize,
    /// Distinct households among prepared records
    pub households: usize,
    pub father: RelationCounts,
    pub mother: RelationCounts,
    pub mate: RelationCounts,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl ResolutionSummary {
    #[must_use]
    pub fn new(records: usize, prepared: usize, households: usize) -> Self {
        Self {
            records,
            prepared,
            households,
            ..Default::default()
        }
    }

    /// Records left out for lack of a household
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.records - self.prepared
    }

    #[must_use]
    pub const fn counts(&self, relation: Relation) -> &RelationCounts {
        match relation {
            Relation::Father => &self.father,
            Relation::Mother => &self.mother,
            Relation::Mate => &self.mate,
        }
    }

    pub fn counts_mut(&mut self, relation: Relation) -> &mut RelationCounts {
        match relation {
            Relation::Father => &mut self.father,
            Relation::Mother => &mut self.mother,
            Relation::Mate => &mut self.mate,
        }
    }

    /// Links committed across all relations and tiers
    #[must_use]
    pub const fn total_links(&self) -> usize {
        self.father.total() + self.mother.total() + self.mate.total()
    }
}

impl fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Relationship Resolution Summary:")?;
        writeln!(
            f,
            "  Records: {} ({} prepared, {} without household)",
            self.records,
            self.prepared,
            self.dropped()
        )?;
        writeln!(f, "  Households: {}", self.households)?;
        for relation in Relation::ALL {
            let counts = self.counts(relation);
            write!(f, "  {relation}: {} links (", counts.total())?;
            for (position, tier) in Tier::ALL.into_iter().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{tier} {}", counts.get(tier))?;
            }
            writeln!(f, ")")?;
        }
        write!(f, "  Elapsed: {:?}", self.elapsed)
    }
}
