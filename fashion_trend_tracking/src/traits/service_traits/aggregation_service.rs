use crate::common::*;

use crate::dto::trend::{aggregated_trend::*, category_mean::*, top_trend_per_year::*};
use crate::model::trend::trend_table::*;

pub trait AggregationService: Send + Sync {
    fn aggregate_by_year_category(&self, table: &TrendTable) -> Vec<AggregatedTrend>;
    fn top_per_year(&self, aggregated: &[AggregatedTrend]) -> Vec<TopTrendPerYear>;
    fn top_n_overall(&self, aggregated: &[AggregatedTrend], n: usize) -> Vec<CategoryMean>;
}
