//! Relation kinds and the rules that differ between them
//!
//! Father, mother and mate resolution share one cascade. Everything that
//! varies per kind (which transcribed fields to read, which sexes and ages
//! are acceptable, how a link is written) is answered by [`Relation`].

use std::fmt;

use crate::common::traits::PersonDetail;
use crate::config::ResolverConfig;
use crate::models::types::Sex;

/// Kind of relationship being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Single-valued father link
    Father,
    /// Single-valued mother link
    Mother,
    /// Multi-valued mate (partner) link
    Mate,
}

impl Relation {
    /// All relations, in resolution order
    pub const ALL: [Self; 3] = [Self::Father, Self::Mother, Self::Mate];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Mate => "mate",
        }
    }

    /// Father and mother hold one link and are never overwritten
    #[must_use]
    pub const fn is_single_valued(self) -> bool {
        !matches!(self, Self::Mate)
    }

    /// Whether the first-name tier also requires the candidate to share the
    /// focus person's last name
    #[must_use]
    pub const fn requires_shared_last_name(self) -> bool {
        self.is_single_valued()
    }

    /// Sex compatibility between the focus person and a candidate
    ///
    /// Unknown sex on either side is accepted. For mates, a focus person of
    /// unknown sex accepts any candidate.
    #[must_use]
    pub fn accepts_sex(self, focus: Option<Sex>, candidate: Option<Sex>) -> bool {
        match self {
            Self::Father => candidate != Some(Sex::Female),
            Self::Mother => candidate != Some(Sex::Male),
            Self::Mate => match (focus, candidate) {
                (Some(focus), Some(candidate)) => candidate == focus.opposite(),
                _ => true,
            },
        }
    }

    /// Age rule for candidates found by name. Missing ages count as 0.
    #[must_use]
    pub const fn accepts_age(self, config: &ResolverConfig, focus_age: u32, candidate_age: u32) -> bool {
        match self {
            Self::Father | Self::Mother => config.is_parent_age(candidate_age),
            Self::Mate => config.is_mate_age(candidate_age, focus_age),
        }
    }

    /// Whether the single-valued link is already set on `person`
    ///
    /// Always false for mates, whose tiers run unconditionally.
    pub fn is_resolved<P, A>(self, accessor: &A, person: &P) -> bool
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.father_in_relation(person).is_some(),
            Self::Mother => accessor.mother_in_relation(person).is_some(),
            Self::Mate => false,
        }
    }

    /// Whether `candidate_id` is already linked to `person` under this relation
    pub fn is_linked<P, A>(self, accessor: &A, person: &P, candidate_id: &str) -> bool
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.father_in_relation(person) == Some(candidate_id),
            Self::Mother => accessor.mother_in_relation(person) == Some(candidate_id),
            Self::Mate => accessor
                .mate_in_relation(person)
                .iter()
                .any(|id| *id == candidate_id),
        }
    }

    /// Transcribed identifier of the relative
    pub fn information_id<'p, P, A>(self, accessor: &A, person: &'p P) -> Option<&'p str>
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.father_information_id(person),
            Self::Mother => accessor.mother_information_id(person),
            Self::Mate => accessor.mate_information_id(person),
        }
    }

    /// Transcribed first name of the relative
    pub fn recorded_first_name<'p, P, A>(self, accessor: &A, person: &'p P) -> Option<&'p str>
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.father_first_name(person),
            Self::Mother => accessor.mother_first_name(person),
            Self::Mate => accessor.mate_first_name(person),
        }
    }

    /// Transcribed last name of the relative
    pub fn recorded_last_name<'p, P, A>(self, accessor: &A, person: &'p P) -> Option<&'p str>
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.father_last_name(person),
            Self::Mother => accessor.mother_last_name(person),
            Self::Mate => accessor.mate_last_name(person),
        }
    }

    /// Transcribed full name of the relative, `None` unless both parts are
    /// present and non-blank
    pub fn recorded_full_name<P, A>(self, accessor: &A, person: &P) -> Option<String>
    where
        A: PersonDetail<P> + ?Sized,
    {
        let first = non_blank(self.recorded_first_name(accessor, person))?;
        let last = non_blank(self.recorded_last_name(accessor, person))?;
        Some(format!("{first} {last}"))
    }

    /// Write the link through the caller's mutator
    pub fn commit<P, A>(self, accessor: &A, person: &mut P, relative_id: &str)
    where
        A: PersonDetail<P> + ?Sized,
    {
        match self {
            Self::Father => accessor.set_father(person, relative_id),
            Self::Mother => accessor.set_mother(person, relative_id),
            Self::Mate => accessor.add_mate(person, relative_id),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `value` unless it is absent, empty, or whitespace
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
