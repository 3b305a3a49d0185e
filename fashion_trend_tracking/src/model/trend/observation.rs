use crate::common::*;

use crate::enums::category::*;

#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get_copy = "pub")]
pub struct Observation {
    pub category: Category,
    pub year: i32,
    pub popularity_score: f64,
}
