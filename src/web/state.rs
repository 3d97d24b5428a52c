use crate::{
    dynamodb::{client::DynamodbClient, Error, Selector},
    Config,
};

use std::{future::Future, sync::Arc, time::Duration};

/// Deadline for the store work of a single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub type SharedState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    selector: Selector,
    timeout: Duration,
}

impl AppState {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub async fn from_config(config: &Config) -> Self {
        let client = DynamodbClient::builder()
            .await
            .region(config.region())
            .endpoint_url(config.endpoint_url())
            .build();

        Self::new(Selector::new(Arc::new(client), config.table().clone()))
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Runs `call` under the request deadline. On expiry the call is dropped,
    /// which cancels the in-flight store request.
    pub async fn within_deadline<F, T>(&self, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| Error::Timeout(self.timeout))?
    }
}
