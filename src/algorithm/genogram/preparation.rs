//! Preparation utilities for relationship resolution
//!
//! This module decorates caller records with the keys the resolver groups
//! and searches by, and builds the household and identifier indexes over
//! them. Records are never copied; a [`PreparedPerson`] refers back to its
//! record by position in the caller's slice.

use rustc_hash::FxHashMap;

use crate::common::traits::PersonDetail;

/// Grouping key of a household: (catchment code, household number)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HouseholdKey {
    pub catchment_code: String,
    pub household_number: String,
}

impl HouseholdKey {
    #[must_use]
    pub fn new(catchment_code: impl Into<String>, household_number: impl Into<String>) -> Self {
        Self {
            catchment_code: catchment_code.into(),
            household_number: household_number.into(),
        }
    }
}

/// A record decorated with its precomputed grouping keys
///
/// Only lives for one resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPerson {
    /// Household the person belongs to
    pub household: HouseholdKey,
    /// First and last name joined by a space
    pub name: String,
    /// Identifier of the underlying record
    pub identifier: String,
    /// Position of the underlying record in the caller's slice
    pub index: usize,
}

/// Household key to positions in the prepared list, in prepared order
pub type HouseholdIndex = FxHashMap<HouseholdKey, Vec<usize>>;

/// Prepare records for resolution
///
/// Records without a catchment code or household number are left out. The
/// output keeps input order.
pub fn prepare<P, A>(persons: &[P], accessor: &A) -> Vec<PreparedPerson>
where
    A: PersonDetail<P> + ?Sized,
{
    let prepared: Vec<PreparedPerson> = persons
        .iter()
        .enumerate()
        .filter_map(|(index, person)| {
            let catchment_code = accessor.catchment_code(person)?;
            let household_number = accessor.household_number(person)?;
            Some(PreparedPerson {
                household: HouseholdKey::new(catchment_code, household_number),
                name: accessor.full_name(person),
                identifier: accessor.identifier(person).to_string(),
                index,
            })
        })
        .collect();

    let dropped = persons.len() - prepared.len();
    if dropped > 0 {
        log::debug!("{dropped} records without catchment code or household number left out");
    }

    prepared
}

/// Group prepared persons by household
///
/// Every prepared person appears in exactly one group.
#[must_use]
pub fn group_by_household(prepared: &[PreparedPerson]) -> HouseholdIndex {
    let mut groups = HouseholdIndex::default();
    for (position, person) in prepared.iter().enumerate() {
        groups
            .entry(person.household.clone())
            .or_default()
            .push(position);
    }
    groups
}

/// Identifier to position in the prepared list
///
/// When an identifier occurs more than once the earliest position wins, the
/// same answer a front-to-back scan would give.
#[derive(Debug, Default, Clone)]
pub struct IdentifierIndex {
    positions: FxHashMap<String, usize>,
}

impl IdentifierIndex {
    #[must_use]
    pub fn build(prepared: &[PreparedPerson]) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(prepared.len());
        for (position, person) in prepared.iter().enumerate() {
            positions
                .entry(person.identifier.clone())
                .or_insert(position);
        }
        Self { positions }
    }

    /// Position of the first prepared person with `identifier`
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Everything the resolvers need about one run's population
#[derive(Debug, Clone)]
pub struct PreparedPopulation {
    pub persons: Vec<PreparedPerson>,
    pub households: HouseholdIndex,
    pub identifiers: IdentifierIndex,
}

impl PreparedPopulation {
    /// Prepare `persons` and build both indexes
    pub fn build<P, A>(persons: &[P], accessor: &A) -> Self
    where
        A: PersonDetail<P> + ?Sized,
    {
        let prepared = prepare(persons, accessor);
        Self::from_prepared(prepared)
    }

    #[must_use]
    pub fn from_prepared(persons: Vec<PreparedPerson>) -> Self {
        let households = group_by_household(&persons);
        let identifiers = IdentifierIndex::build(&persons);
        Self {
            persons,
            households,
            identifiers,
        }
    }

    /// Residents sharing `key`, in prepared order
    pub fn household(&self, key: &HouseholdKey) -> impl Iterator<Item = &PreparedPerson> {
        self.households
            .get(key)
            .into_iter()
            .flatten()
            .map(|&position| &self.persons[position])
    }

    /// First prepared person carrying `identifier`
    #[must_use]
    pub fn by_identifier(&self, identifier: &str) -> Option<&PreparedPerson> {
        self.identifiers
            .find(identifier)
            .map(|position| &self.persons[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
