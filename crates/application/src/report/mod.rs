//! Reports
//!
//! General and individual reports over the registry, with numeric chart
//! projections for front ends to draw.

mod aggregator;
mod charts;

pub use aggregator::*;
pub use charts::*;
pub use crate::scoring::stats::Description;
