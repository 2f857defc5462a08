//! Structural validation and immutability checks for tasks.
//!
//! Validation enumerates *all* violations of a candidate task rather than
//! stopping at the first one, so that audit logs show everything that was
//! wrong with a rejected request.

pub mod diff;
pub mod rules;
pub mod structural;
mod violation;

pub use diff::{ChangedField, diff_immutable_fields};
pub use structural::StructuralValidator;
pub use violation::{TaskViolation, ViolationList};
