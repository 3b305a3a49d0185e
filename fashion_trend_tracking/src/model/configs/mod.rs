pub mod html_config;
pub mod server_config;
pub mod total_config;
pub mod trend_config;
