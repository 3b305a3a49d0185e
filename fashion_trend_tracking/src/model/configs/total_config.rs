use crate::common::*;

use crate::model::configs::{html_config::*, server_config::*, trend_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub trend: TrendConfig,
    pub html: HtmlConfig,
}

#[doc = "Listen address config"]
pub fn get_server_config_info() -> &'static ServerConfig {
    &TOTAL_CONFIG.server
}

#[doc = "Mock trend data and image output config"]
pub fn get_trend_config_info() -> &'static TrendConfig {
    &TOTAL_CONFIG.trend
}

#[doc = "HTML template locations"]
pub fn get_html_config_info() -> &'static HtmlConfig {
    &TOTAL_CONFIG.html
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_server_config_parses() {
        let path: String = format!(
            "{}/config/server_config.toml",
            env!("CARGO_MANIFEST_DIR")
        );
        let config: TotalConfig = read_toml_from_file::<TotalConfig>(&path).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.trend.projection_years.years().len(), 6);
        assert_eq!(config.trend.top_n, 5);
        assert!(config.trend.validate().is_ok());
        assert!(config.html.index_template.ends_with("index_template.html"));
    }
}
