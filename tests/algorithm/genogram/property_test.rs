//! Invariants that must hold for any population
//!
//! Each test resolves a batch of seeded random populations and checks the
//! outcome record by record.

use genogram::{GenogramProcess, PersonRecord, Sex};
use rustc_hash::FxHashMap;

use crate::utils::{random_population, resolver};

const SEEDS: [u64; 8] = [1, 7, 42, 99, 123, 2024, 31337, 65535];
const POPULATION_SIZE: usize = 60;

fn is_prepared(person: &PersonRecord) -> bool {
    person.catchment_code.is_some() && person.household_number.is_some()
}

fn same_household(a: &PersonRecord, b: &PersonRecord) -> bool {
    is_prepared(a)
        && a.catchment_code == b.catchment_code
        && a.household_number == b.household_number
}

fn age(person: &PersonRecord) -> u32 {
    person.age.unwrap_or(0)
}

/// Resolve a fresh population for every seed
fn resolved_populations() -> impl Iterator<Item = (u64, Vec<PersonRecord>)> {
    SEEDS.into_iter().map(|seed| {
        let mut persons = random_population(seed, POPULATION_SIZE);
        resolver().process(&mut persons);
        (seed, persons)
    })
}

fn index(persons: &[PersonRecord]) -> FxHashMap<&str, &PersonRecord> {
    persons.iter().map(|p| (p.id.as_str(), p)).collect()
}

#[test]
fn test_summary_matches_committed_links() {
    for seed in SEEDS {
        let mut persons = random_population(seed, POPULATION_SIZE);
        let summary = resolver().process(&mut persons);

        let fathers = persons.iter().filter(|p| p.father.is_some()).count();
        let mothers = persons.iter().filter(|p| p.mother.is_some()).count();
        let mates: usize = persons.iter().map(|p| p.mates.len()).sum();
        let dropped = persons.iter().filter(|p| !is_prepared(p)).count();

        assert_eq!(summary.father.total(), fathers, "seed {seed}");
        assert_eq!(summary.mother.total(), mothers, "seed {seed}");
        assert_eq!(summary.mate.total(), mates, "seed {seed}");
        assert_eq!(summary.dropped(), dropped, "seed {seed}");
        assert_eq!(summary.records, POPULATION_SIZE);
    }
}

#[test]
fn test_second_run_changes_nothing() {
    for (seed, mut persons) in resolved_populations() {
        let before = persons.clone();
        let summary = resolver().process(&mut persons);

        assert_eq!(summary.total_links(), 0, "seed {seed}");
        assert_eq!(persons, before, "seed {seed}");
    }
}

#[test]
fn test_no_self_links() {
    for (seed, persons) in resolved_populations() {
        for person in &persons {
            let id = Some(person.id.as_str());
            assert_ne!(person.father.as_deref(), id, "seed {seed}");
            assert_ne!(person.mother.as_deref(), id, "seed {seed}");
            assert!(!person.mates.contains(&person.id), "seed {seed}");
        }
    }
}

#[test]
fn test_sex_rules_hold() {
    for (seed, persons) in resolved_populations() {
        let by_id = index(&persons);
        for person in &persons {
            if let Some(father) = &person.father {
                assert_ne!(by_id[father.as_str()].sex, Some(Sex::Female), "seed {seed}");
            }
            if let Some(mother) = &person.mother {
                assert_ne!(by_id[mother.as_str()].sex, Some(Sex::Male), "seed {seed}");
            }
            for mate in &person.mates {
                if let (Some(own), Some(other)) = (person.sex, by_id[mate.as_str()].sex) {
                    assert_eq!(other, own.opposite(), "seed {seed}: {} and {mate}", person.id);
                }
            }
        }
    }
}

#[test]
fn test_cross_household_links_come_from_identifiers() {
    for (seed, persons) in resolved_populations() {
        let by_id = index(&persons);
        for person in &persons {
            let links = [
                (person.father.as_deref(), person.father_information_id.as_deref()),
                (person.mother.as_deref(), person.mother_information_id.as_deref()),
            ]
            .into_iter()
            .filter_map(|(link, hint)| link.map(|link| (link, hint)))
            .chain(
                person
                    .mates
                    .iter()
                    .map(|mate| (mate.as_str(), person.mate_information_id.as_deref())),
            );

            for (link, hint) in links {
                let target = by_id[link];
                assert!(
                    same_household(person, target) || hint == Some(link),
                    "seed {seed}: {} linked to {link} outside its household",
                    person.id
                );
            }
        }
    }
}

#[test]
fn test_records_without_household_stay_unlinked() {
    for (seed, persons) in resolved_populations() {
        let dropped: Vec<&str> = persons
            .iter()
            .filter(|p| !is_prepared(p))
            .map(|p| p.id.as_str())
            .collect();

        for person in &persons {
            if !is_prepared(person) {
                assert!(!person.has_links(), "seed {seed}: {} was linked", person.id);
            }
            let targets = person
                .father
                .iter()
                .chain(person.mother.iter())
                .chain(person.mates.iter());
            for target in targets {
                assert!(!dropped.contains(&target.as_str()), "seed {seed}: {target} was a target");
            }
        }
    }
}

#[test]
fn test_name_matches_respect_age_rules() {
    for (seed, persons) in resolved_populations() {
        let by_id = index(&persons);
        for person in &persons {
            let parents = [
                (person.father.as_deref(), person.father_information_id.as_deref()),
                (person.mother.as_deref(), person.mother_information_id.as_deref()),
            ];
            for (link, hint) in parents {
                if let Some(link) = link.filter(|link| hint != Some(*link)) {
                    assert!(age(by_id[link]) > 15, "seed {seed}: parent {link} too young");
                }
            }

            for mate in &person.mates {
                if person.mate_information_id.as_deref() == Some(mate.as_str()) {
                    continue;
                }
                let gap = age(person).abs_diff(age(by_id[mate.as_str()]));
                assert!(gap <= 5, "seed {seed}: {} and {mate} are {gap} years apart", person.id);
            }
        }
    }
}

#[test]
fn test_identifier_match_takes_precedence() {
    for (seed, persons) in resolved_populations() {
        let by_id = index(&persons);
        for person in persons.iter().filter(|p| is_prepared(p)) {
            let Some(hint) = person.father_information_id.as_deref() else {
                continue;
            };
            let Some(candidate) = by_id.get(hint) else {
                continue;
            };
            if candidate.id == person.id
                || !is_prepared(candidate)
                || candidate.sex == Some(Sex::Female)
            {
                continue;
            }
            assert_eq!(person.father.as_deref(), Some(hint), "seed {seed}: {}", person.id);
        }
    }
}
