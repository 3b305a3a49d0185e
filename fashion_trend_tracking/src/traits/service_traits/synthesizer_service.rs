use crate::common::*;

use crate::enums::{category::*, score_scale::*};
use crate::model::trend::trend_table::*;

pub trait SynthesizerService: Send + Sync {
    #[doc = r#"
        One random score per (year, category), years outer and categories inner.
        # Arguments
        * `categories` - Categories to generate
        * `years` - Years to generate
        * `scale` - Range of the scores
    "#]
    fn generate_exhaustive(
        &self,
        categories: &[Category],
        years: &[i32],
        scale: ScoreScale,
    ) -> TrendTable;

    #[doc = r#"
        `count` independent rows with uniformly sampled category, year and score.
        Fails when rows are requested but `categories` or `years` is empty.
    "#]
    fn generate_sampled(
        &self,
        categories: &[Category],
        years: &[i32],
        count: usize,
        scale: ScoreScale,
    ) -> anyhow::Result<TrendTable>;

    #[doc = "One random score per year"]
    fn generate_series(&self, years: &[i32], scale: ScoreScale) -> Vec<f64>;

    #[doc = "Per-category min-max rescale into [0, 1]; constant categories are left unchanged"]
    fn normalize(&self, table: &TrendTable) -> TrendTable;
}
