mod account;
mod email;
mod plan;

pub use account::{Account, AccountProfile};
pub use email::Email;
pub use plan::Plan;
