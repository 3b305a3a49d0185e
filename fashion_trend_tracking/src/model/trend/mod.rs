pub mod observation;
pub mod trend_table;
pub mod year_range;
