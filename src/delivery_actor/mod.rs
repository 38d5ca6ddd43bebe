//! Delivery tracking records, seeded with the demo shipments.

pub mod entity;
pub mod error;
mod seed;

pub use error::*;
pub use seed::*;
