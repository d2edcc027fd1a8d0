//! Common traits used across the codebase
//!
//! This module defines the seams between the resolution algorithm and the
//! records it operates on.

pub mod person;

pub use person::{MateIds, PersonDetail};
