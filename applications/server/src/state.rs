/// Shared application state
use crate::services::AccountService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
}

impl AppState {
    pub fn new(accounts: Arc<AccountService>) -> Self {
        Self { accounts }
    }
}
