use crate::common::*;

use crate::enums::{category::*, score_scale::*};
use crate::model::trend::{observation::*, trend_table::*};
use crate::traits::service_traits::synthesizer_service::*;

#[doc = "One observation per (year, category) drawn from `rng`, years outer"]
pub fn exhaustive_observations<R: Rng + ?Sized>(
    rng: &mut R,
    categories: &[Category],
    years: &[i32],
    scale: ScoreScale,
) -> TrendTable {
    let mut rows: Vec<Observation> = Vec::with_capacity(categories.len() * years.len());

    for year in years {
        for category in categories {
            rows.push(Observation::new(*category, *year, scale.sample(rng)));
        }
    }

    TrendTable::new(rows)
}

#[doc = "`count` observations with category, year and score sampled independently from `rng`"]
pub fn sampled_observations<R: Rng + ?Sized>(
    rng: &mut R,
    categories: &[Category],
    years: &[i32],
    count: usize,
    scale: ScoreScale,
) -> anyhow::Result<TrendTable> {
    if count > 0 && (categories.is_empty() || years.is_empty()) {
        return Err(anyhow!(
            "[sampled_observations] Cannot sample {} rows from {} categories and {} years",
            count,
            categories.len(),
            years.len()
        ));
    }

    let mut rows: Vec<Observation> = Vec::with_capacity(count);

    for _ in 0..count {
        let category: Category = *categories
            .choose(rng)
            .ok_or_else(|| anyhow!("[sampled_observations] Empty category list"))?;
        let year: i32 = *years
            .choose(rng)
            .ok_or_else(|| anyhow!("[sampled_observations] Empty year list"))?;

        rows.push(Observation::new(category, year, scale.sample(rng)));
    }

    Ok(TrendTable::new(rows))
}

#[doc = r#"
    Per-category min-max normalization.

    Every category with distinct scores is mapped so its minimum becomes 0 and its
    maximum 1. A category whose minimum equals its maximum (a single observation or
    constant scores) is copied unchanged rather than divided by zero.
"#]
pub fn normalize_per_category(table: &TrendTable) -> TrendTable {
    let mut bounds: BTreeMap<Category, (f64, f64)> = BTreeMap::new();

    for row in table.iter() {
        bounds
            .entry(row.category)
            .and_modify(|(min, max)| {
                *min = min.min(row.popularity_score);
                *max = max.max(row.popularity_score);
            })
            .or_insert((row.popularity_score, row.popularity_score));
    }

    let rows: Vec<Observation> = table
        .iter()
        .map(|row| {
            let (min, max) = bounds[&row.category];

            if max > min {
                Observation::new(
                    row.category,
                    row.year,
                    (row.popularity_score - min) / (max - min),
                )
            } else {
                *row
            }
        })
        .collect();

    TrendTable::new(rows)
}

#[doc = r#"
    Random trend source.

    With a seed every call starts from the same `StdRng` state, so repeated calls
    return identical data. Without one each call draws a fresh generator from OS
    entropy. No generator outlives a call, so requests never share random state.
"#]
#[derive(Debug, Clone, Default, new)]
pub struct SynthesizerServiceImpl {
    seed: Option<u64>,
}

impl SynthesizerServiceImpl {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl SynthesizerService for SynthesizerServiceImpl {
    fn generate_exhaustive(
        &self,
        categories: &[Category],
        years: &[i32],
        scale: ScoreScale,
    ) -> TrendTable {
        exhaustive_observations(&mut self.rng(), categories, years, scale)
    }

    fn generate_sampled(
        &self,
        categories: &[Category],
        years: &[i32],
        count: usize,
        scale: ScoreScale,
    ) -> anyhow::Result<TrendTable> {
        sampled_observations(&mut self.rng(), categories, years, count, scale)
    }

    fn generate_series(&self, years: &[i32], scale: ScoreScale) -> Vec<f64> {
        let mut rng: StdRng = self.rng();
        years.iter().map(|_| scale.sample(&mut rng)).collect()
    }

    fn normalize(&self, table: &TrendTable) -> TrendTable {
        normalize_per_category(table)
    }
}
