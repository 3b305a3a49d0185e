use crate::common::*;

#[doc = "A chart after delivery: the file it was written to, or its base64 PNG payload"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedChart {
    File(PathBuf),
    Inline(String),
}

impl RenderedChart {
    #[doc = "Value usable as an `<img src>`: a `data:` URI for inline charts, the path otherwise"]
    pub fn image_src(&self) -> String {
        match self {
            RenderedChart::File(path) => path.to_string_lossy().replace('\\', "/"),
            RenderedChart::Inline(base64_png) => format!("data:image/png;base64,{}", base64_png),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_chart_becomes_data_uri() {
        let chart: RenderedChart = RenderedChart::Inline("iVBORw0K".to_string());
        assert_eq!(chart.image_src(), "data:image/png;base64,iVBORw0K");
    }

    #[test]
    fn file_chart_keeps_its_path() {
        let chart: RenderedChart = RenderedChart::File(PathBuf::from("static/yearly_trend_Bag.png"));
        assert_eq!(chart.image_src(), "static/yearly_trend_Bag.png");
    }
}
