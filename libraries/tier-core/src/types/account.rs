/// Account domain types
use super::{Email, Plan};
use serde::{Deserialize, Serialize};

/// Stored account record
///
/// The password is kept and compared verbatim. Swapping in a salted hash
/// only needs `Account::new` and `password_matches` to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Free-form display name
    pub name: String,

    /// Identity key of the account
    pub email: Email,

    /// Password as supplied at registration
    password: String,

    /// Current subscription tier
    pub plan: Plan,
}

impl Account {
    /// Create a new account on the free plan
    pub fn new(name: impl Into<String>, email: Email, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email,
            password: password.into(),
            plan: Plan::Free,
        }
    }

    /// Exact comparison against the stored password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Public view of the account
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            plan: self.plan,
        }
    }
}

/// Account as returned to clients (never includes the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Display name
    pub name: String,

    /// Identity key
    pub email: Email,

    /// Current subscription tier
    pub plan: Plan,
}
