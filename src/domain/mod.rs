pub mod cart;
pub mod catalog_query;
pub mod chat;
pub mod delivery;
pub mod id;
pub mod listing;
pub mod order;
pub mod payment;
pub mod product;
pub mod validation;

pub use cart::*;
pub use catalog_query::*;
pub use chat::*;
pub use delivery::*;
pub use id::*;
pub use listing::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use validation::ValidationError;
