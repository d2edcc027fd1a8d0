//! Utility functions shared by the library and the command line tool

pub mod logging;

pub use logging::{log_operation_complete, log_operation_start, log_warning};
