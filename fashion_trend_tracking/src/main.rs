/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Mock fashion trend charts served over HTTP

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod enums;

mod dto;

mod traits;

mod model;
use model::configs::{total_config::*, trend_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, synthesizer_service_impl::*,
    trend_report_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and initial setup */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Fashion trend program start!");

    let trend_config: &TrendConfig = get_trend_config_info();

    trend_config.validate().unwrap_or_else(|e| {
        let err_msg: &str = "[main] The trend configuration is invalid.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    fs::create_dir_all(&trend_config.output_dir).unwrap_or_else(|e| {
        let err_msg: &str = "[main] Failed to create the image output directory.";
        error!("{} {:?} {:?}", err_msg, trend_config.output_dir, e);
        panic!("{} {:?} {:?}", err_msg, trend_config.output_dir, e)
    });

    /* Dependency injection */
    let synthesizer: SynthesizerServiceImpl = SynthesizerServiceImpl::new(trend_config.seed);
    let aggregator: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();

    let report_service: TrendReportServiceImpl<
        SynthesizerServiceImpl,
        AggregationServiceImpl,
        ChartServiceImpl,
    > = TrendReportServiceImpl::new(
        synthesizer,
        aggregator,
        chart_service,
        trend_config.clone(),
        get_html_config_info().clone(),
    );

    let main_controller: MainController<
        TrendReportServiceImpl<SynthesizerServiceImpl, AggregationServiceImpl, ChartServiceImpl>,
    > = MainController::new(report_service);

    main_controller
        .main_task(get_server_config_info(), &trend_config.output_dir)
        .await
        .unwrap_or_else(|e| {
            error!("{:?}", e);
            panic!("{:?}", e)
        });
}
