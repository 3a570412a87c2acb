/// Server services
pub mod accounts;

pub use accounts::{AccountService, Credentials, PaymentConfirmation, RegisterAccount};
