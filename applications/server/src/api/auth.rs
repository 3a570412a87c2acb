/// Authentication API routes
use super::extract::ValidatedJson;
use crate::{
    error::Result,
    services::{Credentials, RegisterAccount},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;
use tier_core::{AccountProfile, Email};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub password: String,
}

/// POST /auth/register
pub async fn register(
    State(app_state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<Json<AccountProfile>> {
    let input = RegisterAccount {
        name: req.name,
        email: Email::parse(&req.email)?,
        password: req.password,
    };

    let profile = app_state.accounts.register(input).await?;
    Ok(Json(profile))
}

/// POST /auth/login
pub async fn login(
    State(app_state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AccountProfile>> {
    let credentials = Credentials {
        email: Email::parse(&req.email)?,
        password: req.password,
    };

    let profile = app_state.accounts.login(credentials).await?;
    Ok(Json(profile))
}
