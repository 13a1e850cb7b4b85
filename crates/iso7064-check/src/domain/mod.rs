//! Domain layer - Pure computational logic
//!
//! This module contains the check digit arithmetic without I/O dependencies.

pub mod charset;
pub mod error;
pub mod hybrid;
pub mod modulus;
pub mod pure;
