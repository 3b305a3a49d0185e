use crate::common::*;

use crate::dto::trend::{aggregated_trend::*, category_mean::*, top_trend_per_year::*};
use crate::model::trend::trend_table::*;

#[doc = r#"
    Everything one report request derives from a freshly synthesized table.

    # Fields
    * `raw` - Synthesized (and optionally normalized) observations
    * `yearly_trends` - Mean score per (year, category)
    * `top_trends_per_year` - Best category of each year
    * `top_n` - Categories ranked by their all-year mean
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct TrendDataset {
    pub raw: TrendTable,
    pub yearly_trends: Vec<AggregatedTrend>,
    pub top_trends_per_year: Vec<TopTrendPerYear>,
    pub top_n: Vec<CategoryMean>,
}
