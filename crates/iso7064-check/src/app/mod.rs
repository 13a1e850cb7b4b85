//! Application layer - Use case implementations
//!
//! This module coordinates the domain calculators into calculation, verification
//! and batch workflows.

pub mod batch;
pub mod checker;
