/// Email address domain type
use crate::error::{Result, TierError};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

/// A syntactically valid email address, used as the account identity key
///
/// The domain part is normalized to lowercase; the local part is kept
/// verbatim, so `Alice@Example.COM` and `Alice@example.com` name the same
/// account while `alice@example.com` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and normalize an email address
    pub fn parse(raw: &str) -> Result<Self> {
        let candidate = raw.to_string();
        if !candidate.validate_email() {
            return Err(TierError::InvalidEmail(candidate));
        }

        // validate_email guarantees exactly one separating '@'
        let (local, domain) = candidate
            .rsplit_once('@')
            .ok_or_else(|| TierError::InvalidEmail(candidate.clone()))?;

        // Deliverable addresses only: no bare hosts or address literals
        if !domain.contains('.') || domain.starts_with('[') {
            return Err(TierError::InvalidEmail(candidate));
        }

        Ok(Self(format!("{}@{}", local, domain.to_lowercase())))
    }

    /// The normalized address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = TierError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
