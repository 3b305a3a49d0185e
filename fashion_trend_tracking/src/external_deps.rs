pub use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
pub use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use futures::future::try_join;
pub use html_escape::{encode_double_quoted_attribute, encode_text};
pub use image::{ImageFormat, RgbImage};
pub use once_cell::sync::Lazy as once_lazy;
pub use rand::{Rng, SeedableRng, prelude::SliceRandom, rngs::StdRng};
pub use tempfile::{Builder as TempFileBuilder, NamedTempFile};
pub use tower_http::services::ServeDir;
