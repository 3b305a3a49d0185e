use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct HtmlConfig {
    pub index_template: String,
    pub trends_template: String,
    pub all_trends_template: String,
}
