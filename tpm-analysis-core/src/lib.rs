pub mod aggregate;
pub mod align;
pub mod chart;
pub mod cli;
pub mod conf;
pub mod extract;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod source;
