use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /* one observation per (category, year) */
    #[default]
    Exhaustive,
    /* `sample_count` independent random (category, year) pairs */
    Sampled,
}
