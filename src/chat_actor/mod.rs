//! Buyer-to-seller conversation.

pub mod entity;
pub mod error;
mod seed;

pub use error::*;
pub use seed::*;
