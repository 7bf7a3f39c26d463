use crate::api::{
    extract::ValidatedJson,
    handlers::{email_syntax, password_not_empty},
};
use axum::{response::IntoResponse, Json};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;
use validator::Validate;

#[derive(ToSchema, Deserialize, Debug, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    #[validate(custom(function = email_syntax))]
    email: String,
    #[validate(custom(function = password_not_empty))]
    #[schema(value_type = String)]
    password: SecretString,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct SignupResponse {
    status: String,
}

#[utoipa::path(
    post,
    path= "/skill-mint/signup",
    request_body = SignupRequest,
    responses (
        (status = 200, description = "Signup accepted", body = [SignupResponse], content_type = "application/json"),
        (status = 422, description = "Malformed payload, missing field or invalid email syntax"),
    ),
    tag= "auth"
)]
// axum handler for signup
//
// Placeholder behavior: nothing is stored, any well-formed request is
// answered with "success".
#[instrument(skip(payload))]
pub async fn signup(ValidatedJson(payload): ValidatedJson<SignupRequest>) -> impl IntoResponse {
    debug!("signup request: {:?}", payload);

    Json(SignupResponse {
        status: "success".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    fn request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password),
        }
    }

    #[test]
    fn validate_accepts_well_formed_request() {
        assert!(request("Jo", "jo@x.com", "p").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let errors = request("", "jo@x.com", "p").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn validate_rejects_bad_email() {
        let errors = request("Jo", "no-dot@domain", "p").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[tokio::test]
    async fn signup_always_returns_success() {
        let response = signup(ValidatedJson(request("Jo", "jo@x.com", "p")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, json!({"status": "success"}));
    }
}
