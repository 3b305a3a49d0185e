use crate::common::*;

use crate::dto::trend::category_mean::*;
use crate::enums::{category::*, score_scale::*};
use crate::model::trend::trend_table::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct CategorySeries {
    pub category: Category,
    pub points: Vec<(i32, f64)>,
}

#[doc = r#"
    Fully described chart, ready to be drawn.

    Each variant owns the data it plots plus the axis decisions (ticks, value
    range, canvas size), so the drawing code never looks anything up on its own.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum TrendChart {
    MultiCategoryLines {
        title: String,
        years: Vec<i32>,
        series: Vec<CategorySeries>,
        scale: ScoreScale,
    },
    TopNBar {
        title: String,
        ranking: Vec<CategoryMean>,
    },
    SingleCategoryLine {
        title: String,
        category: Category,
        years: Vec<i32>,
        scores: Vec<f64>,
        scale: ScoreScale,
    },
}

impl TrendChart {
    #[doc = "One line-with-markers series per category over `years`"]
    pub fn multi_category_lines(
        table: &TrendTable,
        categories: &[Category],
        years: &[i32],
        scale: ScoreScale,
    ) -> anyhow::Result<Self> {
        let (first_year, last_year) = year_bounds(years).ok_or_else(|| {
            anyhow!("[TrendChart->multi_category_lines] Cannot build a chart without years")
        })?;

        let series: Vec<CategorySeries> = categories
            .iter()
            .map(|category| {
                let points: Vec<(i32, f64)> = table
                    .points_for(*category)
                    .into_iter()
                    .filter(|(year, _)| years.contains(year))
                    .collect();
                CategorySeries::new(*category, points)
            })
            .collect();

        Ok(TrendChart::MultiCategoryLines {
            title: format!("Fashion Trends Projection ({}-{})", first_year, last_year),
            years: years.to_vec(),
            series,
            scale,
        })
    }

    #[doc = "Horizontal bars, ranking order top to bottom"]
    pub fn top_n_bar(ranking: &[CategoryMean]) -> anyhow::Result<Self> {
        if ranking.is_empty() {
            return Err(anyhow!(
                "[TrendChart->top_n_bar] Cannot generate a bar chart from an empty ranking"
            ));
        }

        Ok(TrendChart::TopNBar {
            title: format!("Top {} Future Fashion Trends", ranking.len()),
            ranking: ranking.to_vec(),
        })
    }

    pub fn single_category_line(
        title: &str,
        category: Category,
        years: &[i32],
        scores: &[f64],
        scale: ScoreScale,
    ) -> anyhow::Result<Self> {
        if years.len() != scores.len() {
            return Err(anyhow!(
                "[TrendChart->single_category_line] Years and scores must have the same length: {} vs {}",
                years.len(),
                scores.len()
            ));
        }

        if years.is_empty() {
            return Err(anyhow!(
                "[TrendChart->single_category_line] Cannot generate chart with empty data"
            ));
        }

        Ok(TrendChart::SingleCategoryLine {
            title: title.to_string(),
            category,
            years: years.to_vec(),
            scores: scores.to_vec(),
            scale,
        })
    }

    pub fn title(&self) -> &str {
        match self {
            TrendChart::MultiCategoryLines { title, .. }
            | TrendChart::TopNBar { title, .. }
            | TrendChart::SingleCategoryLine { title, .. } => title,
        }
    }

    #[doc = "Years labelled on the x axis; bar charts have none"]
    pub fn x_ticks(&self) -> Vec<i32> {
        match self {
            TrendChart::MultiCategoryLines { years, .. }
            | TrendChart::SingleCategoryLine { years, .. } => years.clone(),
            TrendChart::TopNBar { .. } => Vec::new(),
        }
    }

    #[doc = "Range of the score axis (y for line charts, x for the bar chart)"]
    pub fn value_range(&self) -> (f64, f64) {
        match self {
            TrendChart::MultiCategoryLines { scale, .. }
            | TrendChart::SingleCategoryLine { scale, .. } => (0.0, scale.upper_bound()),
            TrendChart::TopNBar { ranking, .. } => {
                let max_score: f64 = ranking
                    .iter()
                    .map(|entry| entry.mean_score)
                    .fold(0.0, f64::max);
                (0.0, max_score.max(1.0))
            }
        }
    }

    #[doc = "Canvas size in pixels"]
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            TrendChart::MultiCategoryLines { .. } => (1200, 800),
            TrendChart::TopNBar { .. } => (1000, 500),
            TrendChart::SingleCategoryLine { scale: ScoreScale::Percent, .. } => (800, 500),
            TrendChart::SingleCategoryLine { scale: ScoreScale::Unit, .. } => (1000, 600),
        }
    }
}

pub fn year_bounds(years: &[i32]) -> Option<(i32, i32)> {
    let first: i32 = *years.iter().min()?;
    let last: i32 = *years.iter().max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trend::observation::*;

    #[test]
    fn multi_category_lines_ticks_every_year_and_keeps_category_order() {
        let table: TrendTable = TrendTable::new(vec![
            Observation::new(Category::Dress, 2023, 0.3),
            Observation::new(Category::Bag, 2022, 0.6),
            Observation::new(Category::Dress, 2022, 0.9),
        ]);
        let years: Vec<i32> = vec![2022, 2023, 2024];

        let chart: TrendChart = TrendChart::multi_category_lines(
            &table,
            &[Category::Dress, Category::Bag, Category::Coat],
            &years,
            ScoreScale::Unit,
        )
        .unwrap();

        assert_eq!(chart.x_ticks(), years);
        assert_eq!(chart.value_range(), (0.0, 1.0));
        assert_eq!(chart.title(), "Fashion Trends Projection (2022-2024)");

        match chart {
            TrendChart::MultiCategoryLines { series, .. } => {
                assert_eq!(series.len(), 3);
                assert_eq!(series[0].points, vec![(2022, 0.9), (2023, 0.3)]);
                assert_eq!(series[1].points, vec![(2022, 0.6)]);
                assert!(series[2].points.is_empty());
            }
            other => panic!("unexpected chart {:?}", other),
        }
    }

    #[test]
    fn multi_category_lines_requires_years() {
        let result = TrendChart::multi_category_lines(
            &TrendTable::default(),
            &Category::ALL,
            &[],
            ScoreScale::Unit,
        );
        assert!(result.is_err());
    }

    #[test]
    fn top_n_bar_titles_by_ranking_length_and_rejects_empty() {
        let ranking: Vec<CategoryMean> = vec![
            CategoryMean::new(Category::Coat, 0.8),
            CategoryMean::new(Category::Bag, 0.5),
        ];
        let chart: TrendChart = TrendChart::top_n_bar(&ranking).unwrap();

        assert_eq!(chart.title(), "Top 2 Future Fashion Trends");
        assert!(chart.x_ticks().is_empty());
        assert_eq!(chart.value_range(), (0.0, 1.0));
        assert!(TrendChart::top_n_bar(&[]).is_err());
    }

    #[test]
    fn single_category_line_scales_are_kept_apart() {
        let years: Vec<i32> = vec![2018, 2019];
        let percent: TrendChart = TrendChart::single_category_line(
            "Yearly Trend for Bag",
            Category::Bag,
            &years,
            &[12.0, 87.5],
            ScoreScale::Percent,
        )
        .unwrap();
        let unit: TrendChart = TrendChart::single_category_line(
            "Trends for Bag (2018-2019)",
            Category::Bag,
            &years,
            &[0.12, 0.875],
            ScoreScale::Unit,
        )
        .unwrap();

        assert_eq!(percent.value_range(), (0.0, 100.0));
        assert_eq!(unit.value_range(), (0.0, 1.0));
        assert_ne!(percent.dimensions(), unit.dimensions());
    }

    #[test]
    fn single_category_line_rejects_length_mismatch_and_empty_input() {
        assert!(TrendChart::single_category_line(
            "t",
            Category::Bag,
            &[2018, 2019],
            &[0.5],
            ScoreScale::Unit
        )
        .is_err());
        assert!(
            TrendChart::single_category_line("t", Category::Bag, &[], &[], ScoreScale::Unit)
                .is_err()
        );
    }
}
