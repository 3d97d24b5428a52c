mod query;

pub use query::{FromValidate, Query};
