use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("store unavailable: {0:#}")]
    Unavailable(#[from] anyhow::Error),
    #[error("store call did not finish within {0:?}")]
    Timeout(Duration),
}
