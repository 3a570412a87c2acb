/// Subscription plan domain type
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier of an account
///
/// Tiers are ordered: `Free < Pro`. An account only ever moves up.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Default tier for newly registered accounts
    #[default]
    Free,
    /// Paid tier, granted once a payment is confirmed
    Pro,
}

impl Plan {
    /// Wire name of the plan
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
        }
    }

    /// Move to `target` unless that would be a downgrade.
    pub fn upgrade(self, target: Plan) -> Plan {
        self.max(target)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
