use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::errors::ServiceError;

/// JSON extractor with standardized error bodies
///
/// Deserialization failures (missing fields, wrong types, malformed JSON)
/// come back as the same `{ "error": { code, message, category } }` shape
/// the rest of the API uses instead of axum's plain-text rejection.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(ValidationJsonRejection(rejection)),
        }
    }
}

pub struct ValidationJsonRejection(JsonRejection);

impl ValidationJsonRejection {
    fn to_service_error(&self) -> ServiceError {
        let error_message = self.0.body_text();

        if let Some(field) = error_message
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
        {
            return ServiceError::missing_field(field);
        }

        match &self.0 {
            JsonRejection::JsonDataError(_) => {
                let detail = error_message
                    .split(": ")
                    .last()
                    .and_then(|s| s.split(" at line").next())
                    .unwrap_or("invalid field value");
                ServiceError::invalid_input(format!("Invalid request body: {}", detail))
            }
            JsonRejection::JsonSyntaxError(_) => {
                ServiceError::invalid_input("Invalid request body: failed to parse JSON")
            }
            JsonRejection::MissingJsonContentType(_) => {
                ServiceError::invalid_input("Expected request with `Content-Type: application/json`")
            }
            _ => ServiceError::invalid_input("Invalid request body"),
        }
    }
}

impl IntoResponse for ValidationJsonRejection {
    fn into_response(self) -> Response {
        let error = self.to_service_error();

        tracing::warn!(
            error_code = %error.code,
            error_message = %error.message,
            original_error = %self.0.body_text(),
            "Request validation failed during JSON deserialization"
        );

        metrics::counter!("errors_total", "category" => error.category.as_str(), "code" => error.code.clone())
            .increment(1);

        let body = Json(json!({
            "error": {
                "code": error.code,
                "message": error.message,
                "category": error.category.as_str(),
            }
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
