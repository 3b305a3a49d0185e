use crate::common::*;

use crate::enums::category::*;
use crate::model::trend::observation::*;

#[doc = r#"
    Ordered collection of observations.

    Either exhaustive (one row per category x year) or sampled, in which case
    duplicated and missing (category, year) pairs are both allowed.
"#]
#[derive(Debug, Clone, Default, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendTable {
    rows: Vec<Observation>,
}

impl TrendTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.rows.iter()
    }

    #[doc = "(year, score) points of one category, sorted by year; rows sharing a year keep table order"]
    pub fn points_for(&self, category: Category) -> Vec<(i32, f64)> {
        let mut points: Vec<(i32, f64)> = self
            .rows
            .iter()
            .filter(|row| row.category == category)
            .map(|row| (row.year, row.popularity_score))
            .collect();

        points.sort_by_key(|(year, _)| *year);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_for_filters_and_sorts_by_year() {
        let table: TrendTable = TrendTable::new(vec![
            Observation::new(Category::Coat, 2024, 0.4),
            Observation::new(Category::Bag, 2022, 0.9),
            Observation::new(Category::Coat, 2022, 0.1),
            Observation::new(Category::Coat, 2024, 0.7),
        ]);

        assert_eq!(
            table.points_for(Category::Coat),
            vec![(2022, 0.1), (2024, 0.4), (2024, 0.7)]
        );
        assert!(table.points_for(Category::Dress).is_empty());
    }
}
