//! Benchmark domain types.
//!
//! Everything here is derived from log text on every load cycle; nothing is
//! persisted or mutated after construction.

mod operation;
mod profile;
mod size_key;
mod variant;


pub use operation::*;
pub use profile::*;
pub use size_key::*;
pub use variant::*;
