//! Domain models
//!
//! This module contains the sex type used by the compatibility guards and
//! the reference person record used by the command line tool.

pub mod person;
pub mod types;

pub use person::{PersonRecord, PersonRecordAccessor};
pub use types::Sex;
