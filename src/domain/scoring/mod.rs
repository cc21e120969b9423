//! Scoring module - Driver scores and percentage aggregation.

mod driver;
mod scores;

pub use driver::Driver;
pub use scores::{DriverPercentages, DriverScores};
