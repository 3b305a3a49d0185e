use crate::common::*;

use crate::dto::trend::{aggregated_trend::*, category_mean::*, top_trend_per_year::*};
use crate::enums::category::*;
use crate::model::trend::trend_table::*;
use crate::traits::service_traits::aggregation_service::*;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct AggregationServiceImpl;

impl AggregationServiceImpl {
    #[doc = "Arithmetic mean of a (sum, count) accumulator"]
    fn mean(sum: f64, count: usize) -> f64 {
        sum / count as f64
    }
}

impl AggregationService for AggregationServiceImpl {
    #[doc = r#"
        Mean score per (year, category).

        Only pairs present in `table` produce a row; absent combinations are not
        zero-filled. Rows come out ordered by year, then category enumeration order.
    "#]
    fn aggregate_by_year_category(&self, table: &TrendTable) -> Vec<AggregatedTrend> {
        let mut groups: BTreeMap<(i32, Category), (f64, usize)> = BTreeMap::new();

        for row in table.iter() {
            let (sum, count) = groups.entry((row.year, row.category)).or_insert((0.0, 0));
            *sum += row.popularity_score;
            *count += 1;
        }

        groups
            .into_iter()
            .map(|((year, category), (sum, count))| {
                AggregatedTrend::new(year, category, Self::mean(sum, count))
            })
            .collect()
    }

    #[doc = r#"
        Best category of every year present in `aggregated`.

        A later row only replaces the current best when its score is strictly
        greater, so among tied maxima the first one in input order wins.
    "#]
    fn top_per_year(&self, aggregated: &[AggregatedTrend]) -> Vec<TopTrendPerYear> {
        let mut best_by_year: BTreeMap<i32, TopTrendPerYear> = BTreeMap::new();

        for row in aggregated {
            let candidate: TopTrendPerYear =
                TopTrendPerYear::new(row.year, row.category, row.popularity_score);

            best_by_year
                .entry(row.year)
                .and_modify(|best| {
                    if candidate.popularity_score > best.popularity_score {
                        *best = candidate;
                    }
                })
                .or_insert(candidate);
        }

        best_by_year.into_values().collect()
    }

    #[doc = r#"
        Categories ranked by the mean of their aggregated scores across all years.

        Sorted non-increasing and truncated to `n`. The sort is stable over
        enumeration order, which settles ties.
    "#]
    fn top_n_overall(&self, aggregated: &[AggregatedTrend], n: usize) -> Vec<CategoryMean> {
        let mut groups: BTreeMap<Category, (f64, usize)> = BTreeMap::new();

        for row in aggregated {
            let (sum, count) = groups.entry(row.category).or_insert((0.0, 0));
            *sum += row.popularity_score;
            *count += 1;
        }

        let mut ranking: Vec<CategoryMean> = groups
            .into_iter()
            .map(|(category, (sum, count))| CategoryMean::new(category, Self::mean(sum, count)))
            .collect();

        ranking.sort_by(|a, b| b.mean_score.total_cmp(&a.mean_score));
        ranking.truncate(n);

        ranking
    }
}
