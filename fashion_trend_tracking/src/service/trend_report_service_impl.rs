use crate::common::*;

use crate::dto::trend::{
    aggregated_trend::*, category_mean::*, rendered_chart::*, top_trend_per_year::*,
    trend_dataset::*,
};
use crate::enums::{category::*, chart_sink::*, generation_mode::*, score_scale::*};
use crate::env_configuration::env_config::*;
use crate::model::{
    configs::{html_config::*, trend_config::*},
    trend::trend_table::*,
};
use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, synthesizer_service::*, trend_report_service::*,
};
use crate::utils_modules::html_utils::*;

#[doc = r#"
    The synthesize -> aggregate -> render -> assemble pipeline behind every route.

    Each call regenerates its data; nothing is cached between requests.
"#]
#[derive(Debug, new)]
pub struct TrendReportServiceImpl<S: SynthesizerService, A: AggregationService, C: ChartService> {
    synthesizer: S,
    aggregator: A,
    chart_service: C,
    trend_config: TrendConfig,
    html_config: HtmlConfig,
}

impl<S, A, C> TrendReportServiceImpl<S, A, C>
where
    S: SynthesizerService,
    A: AggregationService,
    C: ChartService,
{
    #[doc = "Synthesizes the projection table and derives every aggregated view from it"]
    fn build_dataset(&self) -> anyhow::Result<TrendDataset> {
        let years: Vec<i32> = self.trend_config.projection_years.years();

        let generated: TrendTable = match self.trend_config.generation {
            GenerationMode::Exhaustive => {
                self.synthesizer
                    .generate_exhaustive(&Category::ALL, &years, ScoreScale::Unit)
            }
            GenerationMode::Sampled => self.synthesizer.generate_sampled(
                &Category::ALL,
                &years,
                self.trend_config.sample_count,
                ScoreScale::Unit,
            )?,
        };

        let raw: TrendTable = if self.trend_config.normalize {
            self.synthesizer.normalize(&generated)
        } else {
            generated
        };

        let yearly_trends: Vec<AggregatedTrend> =
            self.aggregator.aggregate_by_year_category(&raw);
        let top_trends_per_year: Vec<TopTrendPerYear> =
            self.aggregator.top_per_year(&yearly_trends);
        let top_n: Vec<CategoryMean> = self
            .aggregator
            .top_n_overall(&yearly_trends, self.trend_config.top_n);

        Ok(TrendDataset::new(
            raw,
            yearly_trends,
            top_trends_per_year,
            top_n,
        ))
    }

    fn projection_title(&self) -> String {
        format!(
            "Fashion Trends Projection ({})",
            self.trend_config.projection_years
        )
    }

    fn read_template(&self, template_path: &str) -> anyhow::Result<String> {
        fs::read_to_string(template_path).map_err(|e| {
            anyhow!(
                "[TrendReportServiceImpl->read_template] Failed to read template '{}': {:?}",
                template_path,
                e
            )
        })
    }

    fn generate_yearly_trends_table(&self, yearly_trends: &[AggregatedTrend]) -> String {
        generate_html_table(
            &["year", "clothing_type", "popularity_score"],
            yearly_trends,
            |row| {
                vec![
                    row.year.to_string(),
                    row.category.label().to_string(),
                    format!("{:.6}", row.popularity_score),
                ]
            },
        )
    }

    fn generate_top_trends_table(&self, top_trends: &[TopTrendPerYear]) -> String {
        generate_html_table(
            &["year", "clothing_type", "popularity_score"],
            top_trends,
            |row| {
                vec![
                    row.year.to_string(),
                    row.category.label().to_string(),
                    format!("{:.6}", row.popularity_score),
                ]
            },
        )
    }
}

#[async_trait]
impl<S, A, C> TrendReportService for TrendReportServiceImpl<S, A, C>
where
    S: SynthesizerService,
    A: AggregationService,
    C: ChartService,
{
    async fn index_page(&self) -> anyhow::Result<String> {
        let dataset: TrendDataset = self.build_dataset()?;
        let years: Vec<i32> = self.trend_config.projection_years.years();

        /* both charts are independent, draw them side by side */
        let (projection_chart, top_n_chart) = try_join(
            self.chart_service.render_multi_category_lines(
                dataset.raw(),
                &Category::ALL,
                &years,
                ChartSink::Inline,
            ),
            self.chart_service
                .render_top_n_bar(dataset.top_n(), ChartSink::Inline),
        )
        .await
        .context("[TrendReportServiceImpl->index_page] Failed to render index charts")?;

        let template: String = self.read_template(&self.html_config.index_template)?;

        let html_content: String = template
            .replace("{{PROJECTION_TITLE}}", &encode_text(&self.projection_title()))
            .replace("{{PROJECTION_IMAGE}}", &projection_chart.image_src())
            .replace(
                "{{TOP_N_TITLE}}",
                &format!("Top {} Future Fashion Trends", dataset.top_n().len()),
            )
            .replace("{{TOP_N_IMAGE}}", &top_n_chart.image_src())
            .replace(
                "{{YEARLY_TRENDS_TABLE}}",
                &self.generate_yearly_trends_table(dataset.yearly_trends()),
            )
            .replace(
                "{{TOP_TRENDS_PER_YEAR_TABLE}}",
                &self.generate_top_trends_table(dataset.top_trends_per_year()),
            )
            .replace("{{CATEGORY_OPTIONS}}", &generate_category_options(None));

        Ok(html_content)
    }

    async fn update_plot(&self, category: Category) -> anyhow::Result<String> {
        let years: Vec<i32> = self.trend_config.yearly_trend_years.years();
        let scores: Vec<f64> = self
            .synthesizer
            .generate_series(&years, ScoreScale::Percent);

        let file_name: String = format!("yearly_trend_{}.png", category.file_slug());
        let output_path: PathBuf = self.trend_config.output_dir.join(&file_name);

        let rendered: RenderedChart = self
            .chart_service
            .render_single_category_line(
                &format!("Yearly Trend for {}", category),
                category,
                &years,
                &scores,
                ScoreScale::Percent,
                ChartSink::File(output_path),
            )
            .await
            .with_context(|| {
                format!(
                    "[TrendReportServiceImpl->update_plot] Failed to render yearly trend for '{}'",
                    category
                )
            })?;

        info!("Yearly trend updated for '{}': {:?}", category, rendered);

        Ok(format!("{}/{}", STATIC_URL_PREFIX, file_name))
    }

    async fn show_trends_page(&self, category: Category) -> anyhow::Result<String> {
        let history_years = self.trend_config.history_years;
        let years: Vec<i32> = history_years.years();
        let scores: Vec<f64> = self.synthesizer.generate_series(&years, ScoreScale::Unit);
        let title: String = format!("Trends for {} ({})", category, history_years);

        let rendered: RenderedChart = self
            .chart_service
            .render_single_category_line(
                &title,
                category,
                &years,
                &scores,
                ScoreScale::Unit,
                ChartSink::Inline,
            )
            .await
            .with_context(|| {
                format!(
                    "[TrendReportServiceImpl->show_trends_page] Failed to render trends for '{}'",
                    category
                )
            })?;

        let template: String = self.read_template(&self.html_config.trends_template)?;

        Ok(template
            .replace("{{TREND_TITLE}}", &encode_text(&title))
            .replace("{{TREND_IMAGE}}", &rendered.image_src())
            .replace(
                "{{CATEGORY_OPTIONS}}",
                &generate_category_options(Some(category)),
            ))
    }

    async fn show_all_trends_page(&self) -> anyhow::Result<String> {
        let dataset: TrendDataset = self.build_dataset()?;
        let years: Vec<i32> = self.trend_config.projection_years.years();

        let rendered: RenderedChart = self
            .chart_service
            .render_multi_category_lines(dataset.raw(), &Category::ALL, &years, ChartSink::Inline)
            .await
            .context("[TrendReportServiceImpl->show_all_trends_page] Failed to render projection")?;

        let template: String = self.read_template(&self.html_config.all_trends_template)?;

        Ok(template
            .replace("{{PROJECTION_TITLE}}", &encode_text(&self.projection_title()))
            .replace("{{PROJECTION_IMAGE}}", &rendered.image_src()))
    }
}
