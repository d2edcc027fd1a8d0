//! Common domain type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// Sex of a person
///
/// Unknown sex is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Parse a registry sex code, returning `None` for anything unrecognised
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Some(Self::Male),
            "f" | "female" | "2" => Some(Self::Female),
            _ => None,
        }
    }

    /// Map a numeric registry code (1 = male, 2 = female)
    #[must_use]
    pub const fn from_code(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    /// The other sex
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

/// Lenient deserializer for an optional sex field
///
/// Accepts null, registry strings (`"M"`, `"female"`, `"2"`) and integer
/// codes. Anything unrecognised reads as unknown instead of failing the
/// record.
pub fn deserialize_optional_sex<'de, D>(deserializer: D) -> std::result::Result<Option<Sex>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleSexVisitor;

    impl serde::de::Visitor<'_> for FlexibleSexVisitor {
        type Value = Option<Sex>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("null, an integer or a string representing sex")
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(i32::try_from(value).ok().and_then(Sex::from_code))
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(i32::try_from(value).ok().and_then(Sex::from_code))
        }

        fn visit_f64<E>(self, _value: f64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_bool<E>(self, _value: bool) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Sex::parse(value))
        }
    }

    deserializer.deserialize_any(FlexibleSexVisitor)
}
