use crate::common::*;

use crate::enums::category::*;

#[async_trait]
pub trait TrendReportService: Send + Sync {
    #[doc = "Projection chart, top-N chart and both trend tables on one page"]
    async fn index_page(&self) -> anyhow::Result<String>;

    #[doc = "Writes the percent-scale yearly chart of `category` and returns its public path"]
    async fn update_plot(&self, category: Category) -> anyhow::Result<String>;

    #[doc = "Page with the unit-scale history chart of `category` inlined"]
    async fn show_trends_page(&self, category: Category) -> anyhow::Result<String>;

    #[doc = "Page with the multi-category projection chart inlined"]
    async fn show_all_trends_page(&self) -> anyhow::Result<String>;
}
