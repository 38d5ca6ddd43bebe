//! Cart storage: by-value product copies with a buyer-chosen quantity and unit.

pub mod entity;
pub mod error;

pub use error::*;
