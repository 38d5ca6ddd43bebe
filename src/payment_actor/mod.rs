//! Ledger of completed e-wallet payments.

pub mod entity;
pub mod error;

pub use error::*;
