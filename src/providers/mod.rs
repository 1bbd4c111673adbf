pub mod route53;
pub mod stub;

use crate::auth::credentials::CredentialSource;
use crate::core::provider::RecordSetApi;
use route53::{Route53Config, Route53Provider};
use stub::StubProvider;
use tracing::debug;

/// Builds the client for one invocation from already-resolved credentials.
pub async fn connect(
    credentials: &CredentialSource,
    config: &Route53Config,
) -> Box<dyn RecordSetApi> {
    let client: Box<dyn RecordSetApi> = match credentials {
        CredentialSource::Mock => Box::new(StubProvider::new()),
        CredentialSource::Static { .. } | CredentialSource::Ambient => {
            Box::new(Route53Provider::new(config, credentials).await)
        }
    };
    debug!("Using {} DNS client ({:?} credentials)", client.name(), credentials);
    client
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_mock_uses_stub() {
        let client = connect(&CredentialSource::Mock, &Route53Config::default()).await;
        assert_eq!(client.name(), "stub");
    }

    #[tokio::test]
    async fn test_connect_static_uses_route53() {
        let credentials = CredentialSource::Static {
            access_key_id: "AKID".into(),
            secret_access_key: "secret".into(),
        };
        let config = Route53Config {
            region: Some("us-east-1".into()),
            endpoint_url: None,
        };
        let client = connect(&credentials, &config).await;
        assert_eq!(client.name(), "route53");
    }
}
