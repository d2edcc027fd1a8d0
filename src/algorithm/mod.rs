//! Algorithm implementations
//!
//! This module contains the relationship inference algorithm run over
//! household survey populations.

pub mod genogram;
