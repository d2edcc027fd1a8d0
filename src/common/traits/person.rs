//! Accessor contract for caller-owned person records
//!
//! The relationship resolver never looks inside a person record directly.
//! Everything it reads or writes goes through a [`PersonDetail`]
//! implementation supplied by the caller, so the same algorithm can run over
//! registry structs, database rows, or anything else that can answer these
//! questions.

use smallvec::SmallVec;

use crate::models::types::Sex;

/// Identifiers of the mates already linked to a person
pub type MateIds<'p> = SmallVec<[&'p str; 2]>;

/// Read and write access to an opaque person record `P`
///
/// Accessors borrow from the record they are given. Mutators receive the
/// record mutably and are the only way the resolver changes caller state.
pub trait PersonDetail<P> {
    /// Identifier number (globally unique and stable)
    fn identifier<'p>(&self, person: &'p P) -> &'p str;

    /// Sex, absent when unknown
    fn sex(&self, person: &P) -> Option<Sex>;

    /// Age in whole years, absent when not recorded
    fn age(&self, person: &P) -> Option<u32>;

    /// Given name
    fn first_name<'p>(&self, person: &'p P) -> &'p str;

    /// Family name
    fn last_name<'p>(&self, person: &'p P) -> &'p str;

    /// Clinic or catchment area the person is registered under
    fn catchment_code<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Household number within the catchment area
    fn household_number<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Identifier of the father already linked to this person
    fn father_in_relation<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Identifier of the mother already linked to this person
    fn mother_in_relation<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Identifiers of the mates already linked to this person
    fn mate_in_relation<'p>(&self, person: &'p P) -> MateIds<'p>;

    /// Father's identifier as transcribed on this person's record
    fn father_information_id<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mother's identifier as transcribed on this person's record
    fn mother_information_id<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mate's identifier as transcribed on this person's record
    fn mate_information_id<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Father's first name as transcribed on this person's record
    fn father_first_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Father's last name as transcribed on this person's record
    fn father_last_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mother's first name as transcribed on this person's record
    fn mother_first_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mother's last name as transcribed on this person's record
    fn mother_last_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mate's first name as transcribed on this person's record
    fn mate_first_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Mate's last name as transcribed on this person's record
    fn mate_last_name<'p>(&self, person: &'p P) -> Option<&'p str>;

    /// Link `father_id` as the father of `person`
    fn set_father(&self, person: &mut P, father_id: &str);

    /// Link `mother_id` as the mother of `person`
    fn set_mother(&self, person: &mut P, mother_id: &str);

    /// Append `mate_id` to the mates of `person`
    ///
    /// Implementations are expected to ignore identifiers that are already
    /// present.
    fn add_mate(&self, person: &mut P, mate_id: &str);

    /// First and last name joined by a single space
    fn full_name(&self, person: &P) -> String {
        format!("{} {}", self.first_name(person), self.last_name(person))
    }
}
