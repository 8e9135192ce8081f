//! Chart views and PNG export.
//!
//! A [`ChartView`] is everything a chart draws: its aligned rows plus the
//! title and series names shown around it. The export path never strips a
//! rendered chart after the fact; it asks the view for its plot-only
//! rendering ([`ChartView::draw_plot`]) and rasterises that onto an
//! off-screen surface of the requested size.

mod dashboard;
mod error;
mod export;
mod format;
mod id;
mod plot;
mod sink;
mod view;

#[cfg(test)]
mod tests;

pub use dashboard::*;
pub use error::*;
pub use export::*;
pub use format::format_duration;
pub use id::*;
pub use sink::*;
pub use view::*;
