use crate::common::*;

use crate::enums::category::*;

#[doc = r#"
    Error returned by the route handlers.

    A rejected category is the caller's fault and is answered with its message.
    Anything else is logged with its full chain and answered with a generic 500.
"#]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategoryError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidCategory(e) => {
                warn!("[AppError->into_response] {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            AppError::Internal(e) => {
                error!("[AppError->into_response] {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while generating the fashion trends.",
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_category_maps_to_bad_request() {
        let response: Response =
            AppError::from(InvalidCategoryError("Hat".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_maps_to_server_error() {
        let response: Response = AppError::from(anyhow!("disk full")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
