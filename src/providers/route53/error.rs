use crate::core::provider::{ApiError, ServiceError};
use aws_sdk_route53::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Route53ProviderError {
    #[error("Route 53 rejected the request ({code}): {context}")]
    Service { code: String, context: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request build error: {0}")]
    Build(#[from] BuildError),
}

impl Route53ProviderError {
    /// Splits SDK failures into those the service answered and everything else.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        let context = DisplayErrorContext(&err).to_string();
        match &err {
            SdkError::ServiceError(service) => Route53ProviderError::Service {
                code: service.err().code().unwrap_or("Unknown").to_string(),
                context,
            },
            _ => Route53ProviderError::Transport(context),
        }
    }
}

pub fn map_error(e: Route53ProviderError) -> ApiError {
    use Route53ProviderError::*;
    match e {
        Service { code, context } => ApiError::Service(ServiceError { code, context }),
        Transport(msg) => ApiError::Transport(msg),
        Build(err) => ApiError::Request(err.to_string()),
    }
}
