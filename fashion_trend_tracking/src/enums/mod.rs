pub mod category;
pub mod chart_sink;
pub mod generation_mode;
pub mod score_scale;
