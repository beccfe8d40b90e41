//! Position evaluation.
//!
//! The selector is intentionally shallow, so evaluation is material only:
//! piece counts weighted by the standard relative values. Positive scores
//! favor white, negative favor black; the function is zero-sum and
//! symmetric by construction.
//!
//! ## Module Organization
//!
//! - `material` - material balance evaluation

mod material;

pub use material::evaluate_material;
