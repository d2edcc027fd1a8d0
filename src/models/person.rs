//! Reference person record
//!
//! `PersonRecord` is the concrete record the `genogram` binary reads from and
//! writes back to JSON. Library users with their own record type implement
//! [`PersonDetail`] for it instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::traits::{MateIds, PersonDetail};
use crate::config::ResolverConfig;
use crate::models::types::{Sex, deserialize_optional_sex};

/// A person as transcribed in a household survey
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    /// National identifier number
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Read leniently: unrecognised codes become unknown
    #[serde(deserialize_with = "deserialize_optional_sex")]
    pub sex: Option<Sex>,
    /// Age in whole years, if recorded
    pub age: Option<u32>,
    /// Birth date, used for age when `age` is missing
    pub birth_date: Option<NaiveDate>,
    /// Clinic (catchment area) code
    pub catchment_code: Option<String>,
    pub household_number: Option<String>,

    // Transcribed hints about relatives
    pub father_information_id: Option<String>,
    pub father_first_name: Option<String>,
    pub father_last_name: Option<String>,
    pub mother_information_id: Option<String>,
    pub mother_first_name: Option<String>,
    pub mother_last_name: Option<String>,
    pub mate_information_id: Option<String>,
    pub mate_first_name: Option<String>,
    pub mate_last_name: Option<String>,

    // Resolved links
    /// Identifier of the linked father
    pub father: Option<String>,
    /// Identifier of the linked mother
    pub mother: Option<String>,
    /// Identifiers of linked mates, without duplicates
    pub mates: Vec<String>,
}

impl PersonRecord {
    /// Create a record with an identifier and a name
    #[must_use]
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Place the person in a household
    #[must_use]
    pub fn with_household(mut self, catchment_code: impl Into<String>, household_number: impl Into<String>) -> Self {
        self.catchment_code = Some(catchment_code.into());
        self.household_number = Some(household_number.into());
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Whether any relationship link is set
    #[must_use]
    pub fn has_links(&self) -> bool {
        self.father.is_some() || self.mother.is_some() || !self.mates.is_empty()
    }
}

/// [`PersonDetail`] implementation for [`PersonRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonRecordAccessor {
    /// Date at which ages are derived from birth dates
    reference_date: NaiveDate,
}

impl PersonRecordAccessor {
    #[must_use]
    pub const fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Use the configured reference date, or today when none is set
    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config
                .reference_date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        )
    }

    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

impl PersonDetail<PersonRecord> for PersonRecordAccessor {
    fn identifier<'p>(&self, person: &'p PersonRecord) -> &'p str {
        &person.id
    }

    fn sex(&self, person: &PersonRecord) -> Option<Sex> {
        person.sex
    }

    fn age(&self, person: &PersonRecord) -> Option<u32> {
        person.age.or_else(|| {
            person
                .birth_date
                .and_then(|birth| self.reference_date.years_since(birth))
        })
    }

    fn first_name<'p>(&self, person: &'p PersonRecord) -> &'p str {
        &person.first_name
    }

    fn last_name<'p>(&self, person: &'p PersonRecord) -> &'p str {
        &person.last_name
    }

    fn catchment_code<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.catchment_code.as_deref()
    }

    fn household_number<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.household_number.as_deref()
    }

    fn father_in_relation<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.father.as_deref()
    }

    fn mother_in_relation<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mother.as_deref()
    }

    fn mate_in_relation<'p>(&self, person: &'p PersonRecord) -> MateIds<'p> {
        person.mates.iter().map(String::as_str).collect()
    }

    fn father_information_id<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.father_information_id.as_deref()
    }

    fn mother_information_id<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mother_information_id.as_deref()
    }

    fn mate_information_id<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mate_information_id.as_deref()
    }

    fn father_first_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.father_first_name.as_deref()
    }

    fn father_last_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.father_last_name.as_deref()
    }

    fn mother_first_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mother_first_name.as_deref()
    }

    fn mother_last_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mother_last_name.as_deref()
    }

    fn mate_first_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mate_first_name.as_deref()
    }

    fn mate_last_name<'p>(&self, person: &'p PersonRecord) -> Option<&'p str> {
        person.mate_last_name.as_deref()
    }

    fn set_father(&self, person: &mut PersonRecord, father_id: &str) {
        person.father = Some(father_id.to_string());
    }

    fn set_mother(&self, person: &mut PersonRecord, mother_id: &str) {
        person.mother = Some(mother_id.to_string());
    }

    fn add_mate(&self, person: &mut PersonRecord, mate_id: &str) {
        if !person.mates.iter().any(|id| id == mate_id) {
            person.mates.push(mate_id.to_string());
        }
    }
}
