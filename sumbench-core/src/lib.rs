mod report;
mod strategy;
mod timing;

pub use crate::report::{markdown_table, point_line, range_line, sanity_line, ComparisonRow};
pub use crate::strategy::{sum, ParseStrategyError, Strategy};
pub use crate::timing::{
    time_point, time_range, COMPARE_POINT_REPEATS, COMPARE_RANGE_REPEATS, POINT_INPUTS, RANGES,
    REPEATS,
};
