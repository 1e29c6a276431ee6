use axum::{
    extract::{FromRequest, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use hyper::StatusCode;
use model::Username;
use serde::Serialize;

/// JSON extractor which converts rejections to [ApiError] so that
/// malformed request bodies produce the same error body shape as
/// the other validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// One field-level validation failure. `loc` identifies the failing
/// field, for example `["path", "username"]`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
}

#[derive(Debug)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationErrorDetail>),
}

/// Client-facing request handling error.
///
/// Validation errors respond with status 422 and body
/// `{"detail": [{"loc": [...], "msg": "..."}]}`. Not found errors
/// respond with status 404 and body `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: ErrorDetail,
}

impl ApiError {
    pub fn invalid_username() -> Self {
        Self::validation_error(
            ["path", "username"],
            "Username must contain only ASCII letters",
        )
    }

    pub fn birthdate_in_future() -> Self {
        Self::validation_error(["body", "dateOfBirth"], "Date of birth cannot be in the future")
    }

    pub fn user_not_found(username: &Username) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: ErrorDetail::Message(format!("User {username} not found")),
        }
    }

    fn validation_error(loc: [&str; 2], msg: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: ErrorDetail::Validation(vec![ValidationErrorDetail {
                loc: loc.iter().map(|part| part.to_string()).collect(),
                msg: msg.to_string(),
            }]),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: ErrorDetail::Validation(vec![ValidationErrorDetail {
                loc: vec!["body".to_string()],
                msg: value.body_text(),
            }]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let json_error = match self.detail {
            ErrorDetail::Message(message) => serde_json::json!({
                "detail": message,
            }),
            ErrorDetail::Validation(details) => serde_json::json!({
                "detail": details,
            }),
        };

        (self.status, axum::Json(json_error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(text: &str) -> Username {
        Username::from_string(text.to_string()).unwrap()
    }

    #[test]
    fn validation_errors_use_unprocessable_entity_status() {
        assert_eq!(
            ApiError::invalid_username().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::birthdate_in_future().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn user_not_found_uses_not_found_status() {
        assert_eq!(
            ApiError::user_not_found(&username("testuser")).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_error_response_body_shape() {
        let response = ApiError::birthdate_in_future().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn validation_error_detail_serialization() {
        let detail = ValidationErrorDetail {
            loc: vec!["body".to_string(), "dateOfBirth".to_string()],
            msg: "Date of birth cannot be in the future".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "loc": ["body", "dateOfBirth"],
                "msg": "Date of birth cannot be in the future",
            })
        );
    }
}
