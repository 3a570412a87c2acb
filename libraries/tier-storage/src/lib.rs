//! Tier Storage
//!
//! Account store implementations for Tier.
//!
//! Accounts live in process memory only: the store starts empty when it is
//! created and everything in it is discarded when it is dropped.
//!
//! # Example
//!
//! ```rust
//! use tier_core::{Account, AccountStore, Email, Plan};
//! use tier_storage::MemoryAccountStore;
//!
//! # async fn example() -> tier_core::Result<()> {
//! let store = MemoryAccountStore::new();
//! let email = Email::parse("alice@example.com")?;
//!
//! store.insert(Account::new("Alice", email.clone(), "p1")).await?;
//! let upgraded = store.set_plan(&email, Plan::Pro).await?;
//! assert_eq!(upgraded.plan, Plan::Pro);
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::MemoryAccountStore;
