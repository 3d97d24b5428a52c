mod cors;
mod error;
mod extractor;
mod response;
pub mod route;
mod state;

pub use error::HttpError;
pub use state::{AppState, SharedState, REQUEST_TIMEOUT};
