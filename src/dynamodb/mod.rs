pub mod client;
mod error;
pub mod query;
mod selector;
pub mod types;

pub use error::Error;
pub use selector::Selector;
