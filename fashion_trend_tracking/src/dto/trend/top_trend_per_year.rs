use crate::common::*;

use crate::enums::category::*;

#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get_copy = "pub")]
pub struct TopTrendPerYear {
    pub year: i32,
    pub category: Category,
    pub popularity_score: f64,
}
