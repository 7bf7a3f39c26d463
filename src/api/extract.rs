//! JSON extractor that validates the payload shape before a handler runs.
//!
//! Schema validation failure is the only error path in the service: malformed
//! JSON, a missing field or a field failing its format constraint all reject
//! the request here with a `422` and a per-field error list.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use validator::{Validate, ValidationErrors};

pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = SchemaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(SchemaError::Json)?;

        value.validate().map_err(SchemaError::Validation)?;

        Ok(Self(value))
    }
}

#[derive(Debug)]
pub enum SchemaError {
    Json(JsonRejection),
    Validation(ValidationErrors),
}

#[derive(Serialize, Debug)]
struct FieldError {
    field: String,
    code: String,
    message: String,
}

impl SchemaError {
    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            // Body never reached a typed value: missing fields, wrong types
            // and broken JSON all surface here with serde's description.
            Self::Json(rejection) => vec![FieldError {
                field: "body".to_string(),
                code: "json".to_string(),
                message: rejection.body_text(),
            }],
            Self::Validation(errors) => {
                let mut fields: Vec<FieldError> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(|error| FieldError {
                            field: field.to_string(),
                            code: error.code.to_string(),
                            message: error
                                .message
                                .as_ref()
                                .map_or_else(|| error.code.to_string(), ToString::to_string),
                        })
                    })
                    .collect();

                fields.sort_by(|a, b| a.field.cmp(&b.field));

                fields
            }
        }
    }
}

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "errors": self.field_errors() }));

        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use validator::ValidationError;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_failure_maps_to_422_with_field_list() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "email",
            ValidationError::new("email").with_message("invalid email address syntax".into()),
        );

        let response = SchemaError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        let entry = &body["errors"][0];
        assert_eq!(entry["field"], "email");
        assert_eq!(entry["code"], "email");
        assert_eq!(entry["message"], "invalid email address syntax");
    }

    #[tokio::test]
    async fn message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let response = SchemaError::Validation(errors).into_response();
        let body = body_json(response).await;

        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["message"], "length");
    }
}
