use crate::common::*;

use crate::enums::generation_mode::*;
use crate::model::trend::year_range::*;

#[doc = r#"
    Shape of the mock data and where generated images go.

    # Fields
    * `projection_years` - Years of the multi-category projection and top-N views
    * `yearly_trend_years` - Years of the percent-scale chart written by `/update_plot`
    * `history_years` - Years of the unit-scale chart inlined by `/show_trends`
    * `generation` - Exhaustive or sampled projection data
    * `sample_count` - Rows drawn in sampled mode
    * `normalize` - Per-category min-max rescale of the projection data
    * `top_n` - Length of the overall ranking
    * `output_dir` - Directory image files are written to
    * `seed` - Fixed random seed, random per request when absent
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TrendConfig {
    pub projection_years: YearRange,
    pub yearly_trend_years: YearRange,
    pub history_years: YearRange,
    pub generation: GenerationMode,
    pub sample_count: usize,
    pub normalize: bool,
    pub top_n: usize,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            projection_years: YearRange::new(2022, 2027),
            yearly_trend_years: YearRange::new(2018, 2027),
            history_years: YearRange::new(2015, 2024),
            generation: GenerationMode::Exhaustive,
            sample_count: 100,
            normalize: true,
            top_n: 5,
            output_dir: PathBuf::from("./static"),
            seed: None,
        }
    }
}

impl TrendConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let ranges: [(&str, &YearRange); 3] = [
            ("projection_years", &self.projection_years),
            ("yearly_trend_years", &self.yearly_trend_years),
            ("history_years", &self.history_years),
        ];

        for (name, range) in ranges {
            if range.is_empty() {
                return Err(anyhow!(
                    "[TrendConfig->validate] '{}' is empty: start {} is after end {}",
                    name,
                    range.start,
                    range.end
                ));
            }
        }

        if self.top_n == 0 {
            return Err(anyhow!("[TrendConfig->validate] 'top_n' must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: TrendConfig = toml::from_str(
            r#"
            generation = "sampled"
            sample_count = 40
            projection_years = { start = 2030, end = 2032 }
            "#,
        )
        .unwrap();

        assert_eq!(config.generation, GenerationMode::Sampled);
        assert_eq!(config.sample_count, 40);
        assert_eq!(config.projection_years.years(), vec![2030, 2031, 2032]);
        assert_eq!(config.history_years, YearRange::new(2015, 2024));
        assert_eq!(config.top_n, 5);
        assert!(config.normalize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_ranges_and_zero_top_n() {
        let mut config: TrendConfig = TrendConfig::default();
        config.history_years = YearRange::new(2024, 2015);
        assert!(config.validate().is_err());

        let mut config: TrendConfig = TrendConfig::default();
        config.top_n = 0;
        assert!(config.validate().is_err());
    }
}
