//! In-memory account store

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tier_core::{Account, AccountStore, Email, Plan, Result, TierError};
use tokio::sync::RwLock;

/// Account store backed by a lock-guarded `HashMap`
///
/// Reads share the lock; inserts and plan changes hold it exclusively, so
/// every write is atomic per key.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<Email, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: Account) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        match accounts.entry(account.email.clone()) {
            Entry::Occupied(existing) => {
                tracing::debug!(email = %existing.key(), "Account already exists");
                Err(TierError::Duplicate(existing.key().to_string()))
            }
            Entry::Vacant(slot) => Ok(slot.insert(account).clone()),
        }
    }

    async fn get(&self, email: &Email) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn set_plan(&self, email: &Email, plan: Plan) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .get_mut(email)
            .ok_or_else(|| TierError::not_found("Account", email.as_str()))?;
        account.plan = account.plan.upgrade(plan);

        Ok(account.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.accounts.read().await.len())
    }
}
