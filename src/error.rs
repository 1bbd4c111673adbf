use crate::core::provider::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DNS API error: {0}")]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_api_error_conversion() {
        let err: Error = ApiError::Transport("connection refused".into()).into();
        assert_matches!(err, Error::Api(ApiError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "DNS API error: Transport error: connection refused"
        );
    }
}
