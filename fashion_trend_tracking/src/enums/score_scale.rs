use crate::common::*;

#[doc = r#"
    Numeric range a popularity score lives in.

    `Unit` scores are in [0, 1] and `Percent` scores in [0, 100]. Charts of the two
    scales are not comparable, so every chart carries its own scale.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScale {
    Unit,
    Percent,
}

impl ScoreScale {
    pub fn upper_bound(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 100.0,
        }
    }

    #[doc = "Draws one uniform score in [0, upper_bound)"]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * self.upper_bound()
    }
}
