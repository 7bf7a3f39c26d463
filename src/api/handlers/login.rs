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
pub struct LoginRequest {
    #[validate(custom(function = email_syntax))]
    email: String,
    #[validate(custom(function = password_not_empty))]
    #[schema(value_type = String)]
    password: SecretString,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct LoginResponse {
    status: String,
}

#[utoipa::path(
    post,
    path= "/skill-mint/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login accepted", body = [LoginResponse], content_type = "application/json"),
        (status = 422, description = "Malformed payload or invalid email syntax"),
    ),
    tag= "auth"
)]
// axum handler for login
//
// Placeholder behavior: credentials are never checked against anything, any
// well-formed request is answered with "success".
#[instrument(skip(payload))]
pub async fn login(ValidatedJson(payload): ValidatedJson<LoginRequest>) -> impl IntoResponse {
    debug!("login request: {:?}", payload);

    Json(LoginResponse {
        status: "success".to_string(),
    })
}
