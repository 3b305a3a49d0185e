pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod synthesizer_service_impl;
pub mod trend_report_service_impl;
