use std::env;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::SnsApi;
use crate::errors::TransportError;

/// Overrides applied on top of the AWS SDK defaults when the transport builds
/// its own SNS client. Unset fields fall back to the provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsOptions {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub profile_name: Option<String>,
}

/// Construction-time configuration for [`SnsTransport`](crate::SnsTransport).
#[derive(Clone, Default)]
pub struct TransportConfig {
    /// Pre-built client. When present it is used as-is and `aws` is ignored.
    pub sns: Option<Arc<dyn SnsApi>>,
    pub aws: AwsOptions,
    /// Default platform application ARN used to create endpoints.
    pub platform_app_arn: Option<String>,
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("sns", &self.sns.as_ref().map(|_| "<injected>"))
            .field("aws", &self.aws)
            .field("platform_app_arn", &self.platform_app_arn)
            .finish()
    }
}

fn non_empty(value: Result<String, env::VarError>) -> Option<String> {
    value.ok().filter(|v| !v.trim().is_empty())
}

impl TransportConfig {
    /// # Errors
    ///
    /// Returns an error if `SNS_PLATFORM_APP_ARN` is set but is not an ARN.
    pub fn from_env() -> Result<Self, TransportError> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let platform_app_arn = non_empty(lookup("SNS_PLATFORM_APP_ARN"));
        if let Some(arn) = &platform_app_arn {
            if !arn.starts_with("arn:") {
                return Err(TransportError::ConfigError(format!(
                    "SNS_PLATFORM_APP_ARN: expected an ARN, got {arn}"
                )));
            }
        }

        Ok(Self {
            sns: None,
            aws: AwsOptions {
                region: non_empty(lookup("SNS_REGION")),
                endpoint_url: non_empty(lookup("SNS_ENDPOINT_URL")),
                profile_name: non_empty(lookup("SNS_PROFILE")),
            },
            platform_app_arn,
        })
    }
}

/// Per-send options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendOptions {
    /// The device field already holds an endpoint ARN; skip endpoint creation.
    pub is_endpoint: bool,
    /// Overrides the transport's default application ARN for this send only.
    pub platform_app_arn: Option<String>,
}

impl SendOptions {
    #[must_use]
    pub fn endpoint() -> Self {
        Self {
            is_endpoint: true,
            platform_app_arn: None,
        }
    }

    #[must_use]
    pub fn with_platform_app_arn(arn: impl Into<String>) -> Self {
        Self {
            is_endpoint: false,
            platform_app_arn: Some(arn.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<TransportConfig, TransportError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        TransportConfig::from_lookup(|key| map.get(key).cloned().ok_or(env::VarError::NotPresent))
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = config_from(&[
            (
                "SNS_PLATFORM_APP_ARN",
                "arn:aws:sns:us-east-1:999999999999:app/APNS_SANDBOX/PushApp",
            ),
            ("SNS_REGION", "us-east-1"),
            ("SNS_ENDPOINT_URL", "http://localhost:4566"),
        ])
        .unwrap();

        assert_eq!(
            config.platform_app_arn.as_deref(),
            Some("arn:aws:sns:us-east-1:999999999999:app/APNS_SANDBOX/PushApp")
        );
        assert_eq!(config.aws.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            config.aws.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.aws.profile_name, None);
        assert!(config.sns.is_none());
    }

    #[test]
    fn test_from_lookup_treats_blank_values_as_unset() {
        let config = config_from(&[("SNS_PLATFORM_APP_ARN", "  ")]).unwrap();
        assert_eq!(config.platform_app_arn, None);
        assert_eq!(config.aws, AwsOptions::default());
    }

    #[test]
    fn test_from_lookup_rejects_non_arn() {
        let err = config_from(&[("SNS_PLATFORM_APP_ARN", "foo")]).unwrap_err();
        assert!(matches!(err, TransportError::ConfigError(msg) if msg.contains("foo")));
    }

    #[test]
    fn test_send_options_deserialize_camel_case() {
        let opts: SendOptions =
            serde_json::from_str(r#"{"isEndpoint":true,"platformAppArn":"bar"}"#).unwrap();
        assert!(opts.is_endpoint);
        assert_eq!(opts.platform_app_arn.as_deref(), Some("bar"));

        let empty: SendOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SendOptions::default());
    }
}
