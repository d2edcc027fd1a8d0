//! Resolution run orchestration
//!
//! [`HouseholdGenogram`] prepares the population once and then runs the
//! father, mother and mate resolvers over it. The three relations write
//! disjoint fields, so the fixed order only keeps log output reproducible.
//!
//! Records are mutated in place through the accessor's mutators. The run is
//! single-threaded; callers sharding a population across threads must make
//! sure no record is resolved by two threads at once.

use std::time::Instant;

use log::info;

use crate::common::traits::PersonDetail;
use crate::config::ResolverConfig;
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
};

use super::preparation::{PreparedPopulation, prepare};
use super::relation::Relation;
use super::resolver::RelationResolver;
use super::statistics::{RelationCounts, ResolutionSummary};

/// A relationship resolution pass over a population of records `P`
pub trait GenogramProcess<P> {
    /// Fill in missing father, mother and mate links on `persons`
    fn process(&self, persons: &mut [P]) -> ResolutionSummary;
}

/// Household-scoped resolver driven by a [`PersonDetail`] accessor
#[derive(Debug, Clone)]
pub struct HouseholdGenogram<A> {
    accessor: A,
    config: ResolverConfig,
}

impl<A> HouseholdGenogram<A> {
    /// Create a resolver with default thresholds
    pub fn new(accessor: A) -> Self {
        Self::with_config(accessor, ResolverConfig::default())
    }

    pub const fn with_config(accessor: A, config: ResolverConfig) -> Self {
        Self { accessor, config }
    }

    pub const fn accessor(&self) -> &A {
        &self.accessor
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl<P, A> GenogramProcess<P> for HouseholdGenogram<A>
where
    A: PersonDetail<P>,
{
    fn process(&self, persons: &mut [P]) -> ResolutionSummary {
        let start = Instant::now();
        log_operation_start("Preparing relationship data for", format_args!("{} records", persons.len()));
        let prepared = prepare(persons, &self.accessor);

        info!("Grouping {} persons by household", prepared.len());
        let population = PreparedPopulation::from_prepared(prepared);
        let mut summary =
            ResolutionSummary::new(persons.len(), population.len(), population.households.len());

        let steps = Relation::ALL.len() as u64;
        let progress = self
            .config
            .show_progress
            .then(|| create_main_progress_bar(steps, Some("Resolving relationships")));

        for relation in Relation::ALL {
            info!("Resolving {relation} relationships");
            if let Some(pb) = &progress {
                pb.set_message(format!("{relation} links"));
            }
            let resolver = RelationResolver::new(relation, &self.config);
            let committed = resolver.resolve(persons, &self.accessor, &population);
            *summary.counts_mut(relation) = RelationCounts::from_tiers(committed);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            finish_progress_bar(pb, Some("Relationships resolved"));
        }

        summary.elapsed = start.elapsed();
        log_operation_complete(
            "linked",
            format_args!("{} records", summary.records),
            summary.total_links(),
            Some(summary.elapsed),
        );
        summary
    }
}
