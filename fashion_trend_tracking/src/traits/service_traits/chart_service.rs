use crate::common::*;

use crate::dto::trend::{category_mean::*, rendered_chart::*};
use crate::enums::{category::*, chart_sink::*, score_scale::*};
use crate::model::{chart::trend_chart::*, trend::trend_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = r#"
        Draws `chart` on a fresh surface, encodes it as PNG and delivers it to `sink`
        # Arguments
        * `chart` - Chart description
        * `sink` - File path to (over)write, or inline base64
    "#]
    async fn render_chart(&self, chart: TrendChart, sink: ChartSink)
        -> anyhow::Result<RenderedChart>;

    async fn render_multi_category_lines(
        &self,
        table: &TrendTable,
        categories: &[Category],
        years: &[i32],
        sink: ChartSink,
    ) -> anyhow::Result<RenderedChart> {
        let chart: TrendChart =
            TrendChart::multi_category_lines(table, categories, years, ScoreScale::Unit)?;
        self.render_chart(chart, sink).await
    }

    async fn render_top_n_bar(
        &self,
        top_n: &[CategoryMean],
        sink: ChartSink,
    ) -> anyhow::Result<RenderedChart> {
        let chart: TrendChart = TrendChart::top_n_bar(top_n)?;
        self.render_chart(chart, sink).await
    }

    async fn render_single_category_line(
        &self,
        title: &str,
        category: Category,
        years: &[i32],
        scores: &[f64],
        scale: ScoreScale,
        sink: ChartSink,
    ) -> anyhow::Result<RenderedChart> {
        let chart: TrendChart =
            TrendChart::single_category_line(title, category, years, scores, scale)?;
        self.render_chart(chart, sink).await
    }
}
