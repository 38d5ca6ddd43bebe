//! Typed clients over the store actors, plus the checkout orchestrator.

mod macros;

pub mod cart_client;
pub mod catalog_client;
pub mod chat_client;
pub mod checkout_client;
pub mod delivery_client;
pub mod payment_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use chat_client::*;
pub use checkout_client::*;
pub use delivery_client::*;
pub use payment_client::*;
