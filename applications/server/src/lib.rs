//! Tier Server Library
//!
//! Account registration, login, and plan upgrade over HTTP/JSON.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod shutdown;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use crate::config::{CorsSettings, ServerConfig};
pub use error::{Result, ServerError};
pub use services::AccountService;
pub use state::AppState;
