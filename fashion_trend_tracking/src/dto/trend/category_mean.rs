use crate::common::*;

use crate::enums::category::*;

#[doc = "Mean of a category's aggregated scores across all years"]
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get_copy = "pub")]
pub struct CategoryMean {
    pub category: Category,
    pub mean_score: f64,
}
