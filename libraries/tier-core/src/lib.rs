//! Tier Core
//!
//! Domain types, the account store contract, and error handling shared by
//! the Tier storage layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Account`, `AccountProfile`, `Email`, `Plan`
//! - **Core Traits**: `AccountStore`
//! - **Error Handling**: Unified `TierError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tier_core::{Account, Email, Plan};
//!
//! let email = Email::parse("alice@example.com").unwrap();
//! let account = Account::new("Alice", email, "p1");
//!
//! assert_eq!(account.plan, Plan::Free);
//! assert!(account.password_matches("p1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TierError};
pub use store::AccountStore;
pub use types::{Account, AccountProfile, Email, Plan};
