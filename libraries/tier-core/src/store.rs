//! Account store trait

use crate::error::Result;
use crate::types::{Account, Email, Plan};
use async_trait::async_trait;

/// Mapping from email address to account record
///
/// Implementations must apply each write atomically per key: a concurrent
/// `insert` for the same email has exactly one winner, and `set_plan` never
/// observes or leaves a partially written record.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account
    ///
    /// Fails with `TierError::Duplicate` if the email is already registered,
    /// leaving the existing record untouched.
    async fn insert(&self, account: Account) -> Result<Account>;

    /// Look up an account by email
    async fn get(&self, email: &Email) -> Result<Option<Account>>;

    /// Raise the plan of an existing account
    ///
    /// Plans never go down: requesting a lower tier leaves the current one
    /// in place. Fails with `TierError::NotFound` if the email is unknown.
    async fn set_plan(&self, email: &Email, plan: Plan) -> Result<Account>;

    /// Number of stored accounts
    async fn count(&self) -> Result<usize>;
}
