//! Shared traits used by both `algorithm` and `models`

pub mod traits;

pub use traits::*;
