//! Command implementations

pub mod check;
pub mod compare;
pub mod resolve;
pub mod stats;
pub mod unresolved;
pub mod validate;
