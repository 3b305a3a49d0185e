use crate::common::*;

#[doc = "Where an encoded chart image is delivered"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSink {
    File(PathBuf),
    Inline,
}
