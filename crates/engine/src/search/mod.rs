//! Move selection for the automated opponent.
//!
//! Two-ply material look-ahead: search the mover's candidates, assume the
//! opponent answers each with their best immediate-material reply, and
//! pick the candidate whose worst case is best for the mover. Shallow on
//! purpose; the contract is determinism, not strength.
//!
//! ## Module Organization
//!
//! - `selector` - the two-ply minimax selector

mod selector;

pub use selector::select_move;
