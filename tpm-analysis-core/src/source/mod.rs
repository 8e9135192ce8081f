//! Source loading
//!
//! A source is one machine whose benchmark logs are compared. Each source has
//! two log texts, one per [`Variant`](crate::model::Variant). Loading fetches
//! both, extracts and aggregates them into a [`SourceProfiles`] pair, and
//! tags the outcome so a failing source never takes the others down.
//!
//! fetch (per variant, concurrently)
//! extract
//! aggregate
//! Result<SourceProfiles, SourceLoadError>
//! LoadReport (single collector, keyed by source)

mod error;
mod fetch;
mod loader;

#[cfg(test)]
mod tests;

pub use error::*;
pub use fetch::*;
pub use loader::*;
