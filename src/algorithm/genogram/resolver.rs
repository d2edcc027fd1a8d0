//! Tiered relationship resolver
//!
//! A [`RelationResolver`] fills in one kind of relationship for every
//! prepared person by trying three matching tiers, most authoritative first:
//!
//! 1. by transcribed identifier, searched across the whole population
//! 2. by transcribed full name, searched within the person's household
//! 3. by transcribed first name, searched within the person's household
//!
//! For father and mother a later tier only runs for persons still without a
//! link. Mates are multi-valued, so every tier runs for every person and each
//! may add one mate.
//!
//! Each tier takes the first matching candidate in prepared order and checks
//! the age and guard rules against that candidate only.

use std::fmt;

use crate::common::traits::PersonDetail;
use crate::config::ResolverConfig;

use super::preparation::{PreparedPerson, PreparedPopulation};
use super::relation::{Relation, non_blank};

/// One matching strategy in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Transcribed identifier, whole population
    ById,
    /// Transcribed first and last name, same household
    ByName,
    /// Transcribed first name, same household
    ByFirstName,
}

impl Tier {
    /// All tiers, in precedence order
    pub const ALL: [Self; 3] = [Self::ById, Self::ByName, Self::ByFirstName];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ById => "identifier",
            Self::ByName => "full name",
            Self::ByFirstName => "first name",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolver for a single relation kind
#[derive(Debug, Clone, Copy)]
pub struct RelationResolver<'c> {
    relation: Relation,
    config: &'c ResolverConfig,
}

impl<'c> RelationResolver<'c> {
    #[must_use]
    pub const fn new(relation: Relation, config: &'c ResolverConfig) -> Self {
        Self { relation, config }
    }

    #[must_use]
    pub const fn relation(&self) -> Relation {
        self.relation
    }

    /// Run all three tiers in precedence order
    ///
    /// Returns the number of links committed by each tier.
    pub fn resolve<P, A>(
        &self,
        persons: &mut [P],
        accessor: &A,
        population: &PreparedPopulation,
    ) -> [usize; 3]
    where
        A: PersonDetail<P> + ?Sized,
    {
        Tier::ALL.map(|tier| self.run_tier(tier, persons, accessor, population))
    }

    /// Run a single tier over the whole prepared population
    pub fn run_tier<P, A>(
        &self,
        tier: Tier,
        persons: &mut [P],
        accessor: &A,
        population: &PreparedPopulation,
    ) -> usize
    where
        A: PersonDetail<P> + ?Sized,
    {
        let committed = match tier {
            Tier::ById => self.map_by_id(persons, accessor, population),
            Tier::ByName => self.map_by_name(persons, accessor, population),
            Tier::ByFirstName => self.map_by_first_name(persons, accessor, population),
        };
        log::debug!("{} by {tier}: {committed} links", self.relation);
        committed
    }

    /// Tier 1: match the transcribed identifier against the whole population
    pub fn map_by_id<P, A>(
        &self,
        persons: &mut [P],
        accessor: &A,
        population: &PreparedPopulation,
    ) -> usize
    where
        A: PersonDetail<P> + ?Sized,
    {
        let mut committed = 0;
        for focus in &population.persons {
            let record = &persons[focus.index];
            if self.relation.is_resolved(accessor, record) {
                continue;
            }
            let Some(wanted) = non_blank(self.relation.information_id(accessor, record)) else {
                continue;
            };
            let Some(candidate) = population.by_identifier(wanted) else {
                continue;
            };
            if self.try_commit(persons, accessor, focus, candidate) {
                committed += 1;
            }
        }
        committed
    }

    /// Tier 2: match the transcribed full name within the household
    pub fn map_by_name<P, A>(
        &self,
        persons: &mut [P],
        accessor: &A,
        population: &PreparedPopulation,
    ) -> usize
    where
        A: PersonDetail<P> + ?Sized,
    {
        let mut committed = 0;
        for focus in &population.persons {
            let record = &persons[focus.index];
            if self.relation.is_resolved(accessor, record) {
                continue;
            }
            let Some(wanted) = self.relation.recorded_full_name(accessor, record) else {
                continue;
            };
            let Some(candidate) = population
                .household(&focus.household)
                .find(|resident| resident.name == wanted)
            else {
                continue;
            };
            if !self.ages_match(persons, accessor, focus, candidate) {
                continue;
            }
            if self.try_commit(persons, accessor, focus, candidate) {
                committed += 1;
            }
        }
        committed
    }

    /// Tier 3: match the transcribed first name within the household
    ///
    /// Fathers and mothers must also share the focus person's last name.
    pub fn map_by_first_name<P, A>(
        &self,
        persons: &mut [P],
        accessor: &A,
        population: &PreparedPopulation,
    ) -> usize
    where
        A: PersonDetail<P> + ?Sized,
    {
        let mut committed = 0;
        for focus in &population.persons {
            let record = &persons[focus.index];
            if self.relation.is_resolved(accessor, record) {
                continue;
            }
            let Some(wanted) = non_blank(self.relation.recorded_first_name(accessor, record)) else {
                continue;
            };
            let Some(candidate) = population
                .household(&focus.household)
                .find(|resident| accessor.first_name(&persons[resident.index]) == wanted)
            else {
                continue;
            };
            if self.relation.requires_shared_last_name()
                && accessor.last_name(&persons[candidate.index]) != accessor.last_name(record)
            {
                continue;
            }
            if !self.ages_match(persons, accessor, focus, candidate) {
                continue;
            }
            if self.try_commit(persons, accessor, focus, candidate) {
                committed += 1;
            }
        }
        committed
    }

    fn ages_match<P, A>(
        &self,
        persons: &[P],
        accessor: &A,
        focus: &PreparedPerson,
        candidate: &PreparedPerson,
    ) -> bool
    where
        A: PersonDetail<P> + ?Sized,
    {
        let focus_age = accessor.age(&persons[focus.index]).unwrap_or(0);
        let candidate_age = accessor.age(&persons[candidate.index]).unwrap_or(0);
        self.relation.accepts_age(self.config, focus_age, candidate_age)
    }

    /// Apply the self-reference, sex and duplicate guards, then commit
    fn try_commit<P, A>(
        &self,
        persons: &mut [P],
        accessor: &A,
        focus: &PreparedPerson,
        candidate: &PreparedPerson,
    ) -> bool
    where
        A: PersonDetail<P> + ?Sized,
    {
        if candidate.identifier == focus.identifier {
            return false;
        }
        let focus_sex = accessor.sex(&persons[focus.index]);
        let candidate_sex = accessor.sex(&persons[candidate.index]);
        if !self.relation.accepts_sex(focus_sex, candidate_sex) {
            return false;
        }
        if !self.relation.is_single_valued()
            && self
                .relation
                .is_linked(accessor, &persons[focus.index], &candidate.identifier)
        {
            return false;
        }

        self.relation
            .commit(accessor, &mut persons[focus.index], &candidate.identifier);
        log::trace!(
            "linked {} of {} to {}",
            self.relation,
            focus.identifier,
            candidate.identifier
        );
        true
    }
}
