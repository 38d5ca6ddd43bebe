//! Catalog storage: the product entity, its errors, and the seed listings.

pub mod entity;
pub mod error;
mod seed;

pub use error::*;
pub use seed::*;
