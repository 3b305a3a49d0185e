pub mod aggregation_service;
pub mod chart_service;
pub mod synthesizer_service;
pub mod trend_report_service;
