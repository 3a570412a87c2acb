/// Payment API routes
use super::extract::ValidatedJson;
use crate::{error::Result, services::PaymentConfirmation, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use tier_core::{AccountProfile, Email};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmPaymentRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub transaction_id: String,
}

/// POST /payments/confirm
pub async fn confirm(
    State(app_state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ConfirmPaymentRequest>,
) -> Result<Json<AccountProfile>> {
    let payment = PaymentConfirmation {
        email: Email::parse(&req.email)?,
        transaction_id: req.transaction_id,
    };

    let profile = app_state.accounts.confirm_payment(payment).await?;
    Ok(Json(profile))
}
