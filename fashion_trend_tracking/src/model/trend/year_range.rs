use crate::common::*;

#[doc = "Inclusive range of years, e.g. `{ start = 2022, end = 2027 }`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get_copy = "pub")]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    #[doc = "Every year from start to end inclusive; empty when start > end"]
    pub fn years(&self) -> Vec<i32> {
        (self.start..=self.end).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_inclusive_range() {
        let range: YearRange = YearRange::new(2022, 2027);
        assert_eq!(range.years(), vec![2022, 2023, 2024, 2025, 2026, 2027]);
        assert_eq!(range.to_string(), "2022-2027");
    }

    #[test]
    fn single_year_and_reversed_ranges() {
        assert_eq!(YearRange::new(2024, 2024).years(), vec![2024]);
        assert!(YearRange::new(2025, 2024).years().is_empty());
        assert!(YearRange::new(2025, 2024).is_empty());
    }
}
