// comparison driver
pub mod report;

// output sinks
pub mod chart;
pub mod table;

pub use report::{compare, max_abs_error, ComparisonReport, ComparisonRow};
