use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockmate_core::errors::Error as CoreError;
use stockmate_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        ApiError::Core(err.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                _ if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()),
                _ if e.is_invalid_argument() => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::MarketData(m) if m.is_transport() => {
                    tracing::warn!("Vendor failure: {}", m);
                    (StatusCode::BAD_GATEWAY, e.to_string())
                }
                _ => {
                    tracing::error!("Request failed: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stockmate_core::errors::DatabaseError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Core(CoreError::NotFound("AAPL".into())), 404),
            (
                MarketDataError::InvalidArgument("limit".into()).into(),
                400,
            ),
            (
                MarketDataError::transport("profile", Some(503), "down").into(),
                502,
            ),
            (
                ApiError::Core(DatabaseError::QueryFailed("disk I/O error".into()).into()),
                500,
            ),
            (ApiError::BadRequest("bad body".into()), 400),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status().as_u16(), expected);
        }
    }
}
