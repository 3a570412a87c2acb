/// Account service - registration, login and plan upgrades
use crate::error::{Result, ServerError};
use std::sync::Arc;
use tier_core::{Account, AccountProfile, AccountStore, Email, Plan, TierError};

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct RegisterAccount {
    pub name: String,
    pub email: Email,
    pub password: String,
}

/// Email and password presented at login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// Payment notice for an account
///
/// The transaction id is only checked for presence; it is not verified,
/// stored, or deduplicated.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub email: Email,
    pub transaction_id: String,
}

pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Create a new account on the free plan
    pub async fn register(&self, input: RegisterAccount) -> Result<AccountProfile> {
        let account = Account::new(input.name, input.email, input.password);

        let account = self.store.insert(account).await.map_err(|e| {
            if let TierError::Duplicate(ref email) = e {
                tracing::warn!(email = %email, "Registration for existing account");
            }
            ServerError::from(e)
        })?;

        tracing::info!(email = %account.email, "Account registered");
        Ok(account.profile())
    }

    /// Check credentials against the stored account
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, credentials: Credentials) -> Result<AccountProfile> {
        let account = self
            .store
            .get(&credentials.email)
            .await?
            .filter(|account| account.password_matches(&credentials.password))
            .ok_or_else(|| {
                tracing::warn!(email = %credentials.email, "Login failed");
                ServerError::Auth("Invalid credentials".to_string())
            })?;

        tracing::info!(email = %account.email, "Login succeeded");
        Ok(account.profile())
    }

    /// Move an account to the pro plan
    ///
    /// The account must exist before the transaction id is looked at, so an
    /// unknown email reports not found even when the id is blank.
    pub async fn confirm_payment(&self, payment: PaymentConfirmation) -> Result<AccountProfile> {
        if self.store.get(&payment.email).await?.is_none() {
            tracing::warn!(email = %payment.email, "Payment for unknown account");
            return Err(ServerError::NotFound("User not found".to_string()));
        }

        if payment.transaction_id.trim().is_empty() {
            tracing::warn!(email = %payment.email, "Payment with blank transaction id");
            return Err(ServerError::BadRequest("Invalid transaction id".to_string()));
        }

        tracing::debug!(
            email = %payment.email,
            transaction_id = %payment.transaction_id,
            "Confirming payment"
        );
        let account = self.store.set_plan(&payment.email, Plan::Pro).await?;

        tracing::info!(email = %account.email, plan = %account.plan, "Payment confirmed");
        Ok(account.profile())
    }

    /// Number of registered accounts
    pub async fn account_count(&self) -> Result<usize> {
        self.store.count().await.map_err(ServerError::from)
    }
}
