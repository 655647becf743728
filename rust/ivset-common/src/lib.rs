//! Core definitions shared by all ivset-* crates: error types, result helpers
//! and the fatal contract-violation signal.

pub mod contract;
pub mod error;
pub mod result;

pub use contract::ContractViolation;
pub use result::Result;
