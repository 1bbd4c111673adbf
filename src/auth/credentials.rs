use std::fmt;
use tracing::info;

/// Where the DNS client gets its credentials from, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// No credentials; an in-memory stub stands in for the service.
    Mock,
    Static {
        access_key_id: String,
        secret_access_key: String,
    },
    /// The AWS default chain: environment, shared profile, then instance role.
    Ambient,
}

impl CredentialSource {
    pub fn resolve(
        mock: bool,
        access_key_id: Option<&str>,
        secret_access_key: Option<&str>,
    ) -> Self {
        if mock {
            return CredentialSource::Mock;
        }
        match (non_empty(access_key_id), non_empty(secret_access_key)) {
            (Some(access_key_id), Some(secret_access_key)) => CredentialSource::Static {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.to_string(),
            },
            _ => {
                info!(
                    "No AWS credentials supplied, going to attempt to use automatic credentials from IAM or ENV"
                );
                CredentialSource::Ambient
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Keeps the secret out of logs.
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Mock => f.write_str("Mock"),
            CredentialSource::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            CredentialSource::Ambient => f.write_str("Ambient"),
        }
    }
}
