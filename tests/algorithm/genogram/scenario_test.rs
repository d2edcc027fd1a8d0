//! End-to-end scenarios for relationship resolution

use genogram::algorithm::genogram::{PreparedPopulation, Relation, RelationResolver};
use genogram::{GenogramProcess, HouseholdGenogram, PersonRecord, ResolverConfig, Sex};

use crate::utils::{accessor, by_id, resolver};

#[test]
fn test_father_linked_by_identifier() {
    let mut a = PersonRecord::new("111", "Lek", "Dee").with_household("C1", "H1");
    a.father_information_id = Some("222".to_string());
    let b = PersonRecord::new("222", "Somchai", "Dee")
        .with_household("C1", "H1")
        .with_sex(Sex::Male);
    let mut persons = vec![a, b];

    let config = ResolverConfig::default();
    let population = PreparedPopulation::build(&persons, &accessor());
    let resolver = RelationResolver::new(Relation::Father, &config);
    let committed = resolver.map_by_id(&mut persons, &accessor(), &population);

    assert_eq!(committed, 1);
    assert_eq!(by_id(&persons, "111").father.as_deref(), Some("222"));
}

#[test]
fn test_father_linked_by_name_in_household() {
    let mut a = PersonRecord::new("111", "Lek", "Dee").with_household("C1", "H1");
    a.father_first_name = Some("Somchai".to_string());
    a.father_last_name = Some("Dee".to_string());
    let b = PersonRecord::new("333", "Somchai", "Dee")
        .with_household("C1", "H1")
        .with_age(40);
    let mut persons = vec![a, b];

    resolver().process(&mut persons);
    assert_eq!(by_id(&persons, "111").father.as_deref(), Some("333"));
}

#[test]
fn test_father_linked_by_first_name_only() {
    let mut a = PersonRecord::new("111", "Lek", "Dee").with_household("C1", "H1");
    a.father_first_name = Some("Somchai".to_string());
    let b = PersonRecord::new("333", "Somchai", "Dee")
        .with_household("C1", "H1")
        .with_age(40);
    let mut persons = vec![a, b];

    let summary = resolver().process(&mut persons);
    assert_eq!(by_id(&persons, "111").father.as_deref(), Some("333"));
    assert_eq!(summary.father.by_first_name, 1);
}

#[test]
fn test_mate_outside_age_gap_not_linked() {
    let mut a = PersonRecord::new("1", "Somchai", "Dee")
        .with_household("C1", "H1")
        .with_age(30);
    a.mate_first_name = Some("Nok".to_string());
    let b = PersonRecord::new("2", "Nok", "Sook")
        .with_household("C1", "H1")
        .with_age(50);
    let mut persons = vec![a, b];

    let summary = resolver().process(&mut persons);
    assert!(by_id(&persons, "1").mates.is_empty());
    assert_eq!(summary.total_links(), 0);
}

#[test]
fn test_record_without_household_is_excluded() {
    // would be linked as father by identifier if it had a household
    let mut outsider = PersonRecord::new("222", "Somchai", "Dee").with_sex(Sex::Male);
    outsider.catchment_code = Some("C1".to_string());
    outsider.father_information_id = Some("111".to_string());
    outsider.mate_information_id = Some("333".to_string());

    let mut a = PersonRecord::new("111", "Lek", "Dee")
        .with_household("C1", "H1")
        .with_sex(Sex::Male)
        .with_age(60);
    a.father_information_id = Some("222".to_string());
    a.mate_information_id = Some("222".to_string());
    let c = PersonRecord::new("333", "Malee", "Dee")
        .with_household("C1", "H1")
        .with_sex(Sex::Female);
    let mut persons = vec![outsider, a, c];

    let summary = resolver().process(&mut persons);
    assert!(!by_id(&persons, "222").has_links());
    assert!(by_id(&persons, "111").father.is_none());
    assert!(by_id(&persons, "111").mates.is_empty());
    assert_eq!(summary.dropped(), 1);
    assert_eq!(summary.total_links(), 0);
}

#[test]
fn test_mother_and_father_from_different_tiers() {
    let mut child = PersonRecord::new("10", "Ploy", "Kaew")
        .with_household("C2", "H5")
        .with_age(6);
    child.father_information_id = Some("20".to_string());
    child.mother_first_name = Some("Malee".to_string());

    let father = PersonRecord::new("20", "Anan", "Kaew")
        .with_household("C9", "H1")
        .with_sex(Sex::Male)
        .with_age(35);
    let mother = PersonRecord::new("30", "Malee", "Kaew")
        .with_household("C2", "H5")
        .with_sex(Sex::Female)
        .with_age(33);
    let mut persons = vec![child, father, mother];

    let summary = resolver().process(&mut persons);
    let child = by_id(&persons, "10");
    assert_eq!(child.father.as_deref(), Some("20"));
    assert_eq!(child.mother.as_deref(), Some("30"));
    assert_eq!(summary.father.by_id, 1);
    assert_eq!(summary.mother.by_first_name, 1);
}

#[test]
fn test_custom_thresholds() {
    let mut a = PersonRecord::new("1", "Somchai", "Dee")
        .with_household("C1", "H1")
        .with_age(30);
    a.mate_first_name = Some("Nok".to_string());
    let b = PersonRecord::new("2", "Nok", "Sook")
        .with_household("C1", "H1")
        .with_age(38);
    let mut persons = vec![a, b];

    let config = ResolverConfig {
        mate_max_age_gap: 10,
        ..Default::default()
    };
    let process = HouseholdGenogram::with_config(accessor(), config);
    process.process(&mut persons);
    assert_eq!(by_id(&persons, "1").mates, vec!["2".to_string()]);
}

#[test]
fn test_both_ages_missing_mate_passes_age_check() {
    let mut a = PersonRecord::new("1", "Somchai", "Dee").with_household("C1", "H1");
    a.mate_first_name = Some("Nok".to_string());
    let b = PersonRecord::new("2", "Nok", "Sook").with_household("C1", "H1");
    let mut persons = vec![a, b];

    resolver().process(&mut persons);
    assert_eq!(by_id(&persons, "1").mates, vec!["2".to_string()]);
}
