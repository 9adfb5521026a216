//! Core receipt types, money rules, validation, and installment planning.
//!
//! This module provides the foundational types of the pró-labore receipt
//! pipeline: the immutable request, the INSS withholding arithmetic, and
//! the due-date schedule. Everything here is pure and request-scoped.

mod builder;
mod error;
mod money;
mod schedule;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use money::*;
pub use schedule::*;
pub use types::*;
pub use validation::*;
