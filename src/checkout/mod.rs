//! The checkout handoff: a session object walking an order snapshot from the
//! cart to a terminal stage, re-validating the typed payload at every hop.

pub mod error;
pub mod payload;
pub mod session;
pub mod stage;

pub use error::*;
pub use payload::*;
pub use session::*;
pub use stage::*;
