//! Command implementations

pub mod clean;
