pub mod aggregated_trend;
pub mod category_mean;
pub mod rendered_chart;
pub mod top_trend_per_year;
pub mod trend_dataset;
