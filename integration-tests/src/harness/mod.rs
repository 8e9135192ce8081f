mod fixture;
pub mod tracing;

pub use fixture::Fixture;
pub use tracing::{CapturedEvent, capture_events};
