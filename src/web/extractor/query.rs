use crate::web::error::HttpError;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

/// Query string extractor that validates before handing over the typed value.
pub struct Query<Q>(pub Q);

#[async_trait]
impl<S, Q> FromRequestParts<S> for Query<Q>
where
    S: Send + Sync,
    Q: FromValidate + Send + 'static,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(raw) =
            axum::extract::Query::<<Q as FromValidate>::Validatable>::from_request_parts(
                parts, state,
            )
            .await
            .map_err(|err| {
                warn!("{err}");
                HttpError::Validation(None)
            })?;
        raw.validate().map_err(|err| HttpError::Validation(Some(err)))?;
        Ok(Self(FromValidate::from(raw)))
    }
}

pub trait FromValidate {
    type Validatable: Validate + DeserializeOwned + Send;

    fn from(value: Self::Validatable) -> Self;
}
