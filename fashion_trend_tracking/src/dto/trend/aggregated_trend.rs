use crate::common::*;

use crate::enums::category::*;

#[doc = "Mean popularity score of one (year, category) pair"]
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get_copy = "pub")]
pub struct AggregatedTrend {
    pub year: i32,
    pub category: Category,
    pub popularity_score: f64,
}
