//! Push transport that delivers through SNS platform endpoints.
//!
//! A send either publishes straight to an existing endpoint ARN, or first
//! registers the device token as an endpoint and then publishes to it. Nothing
//! is cached between sends.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::clients::{AwsSnsClient, SnsApi};
use crate::core::config::{SendOptions, TransportConfig};
use crate::core::models::{
    CreateEndpointRequest, Message, PublishRequest, PublishResponse, SendRequest,
};
use crate::core::payload::build_payload;
use crate::errors::TransportError;

/// Platform tag a dispatcher routes to this transport.
pub const PLATFORM: &str = "sns";

/// Dispatcher-facing seam: route by [`platform`](PushTransport::platform),
/// then hand the request over.
#[async_trait]
pub trait PushTransport: Send + Sync {
    fn platform(&self) -> &str;

    async fn deliver(&self, request: &SendRequest) -> Result<PublishResponse, TransportError>;
}

/// The SNS client a transport talks through.
///
/// An injected client stays under the caller's control; the transport only
/// holds another reference to it.
pub enum SnsHandle {
    Owned(AwsSnsClient),
    Shared(Arc<dyn SnsApi>),
}

impl SnsHandle {
    pub fn api(&self) -> &dyn SnsApi {
        match self {
            SnsHandle::Owned(client) => client as &dyn SnsApi,
            SnsHandle::Shared(client) => client.as_ref(),
        }
    }

    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self, SnsHandle::Shared(_))
    }

    pub fn shared(&self) -> Option<&Arc<dyn SnsApi>> {
        match self {
            SnsHandle::Shared(client) => Some(client),
            SnsHandle::Owned(_) => None,
        }
    }
}

impl fmt::Debug for SnsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnsHandle::Owned(client) => f.debug_tuple("Owned").field(client).finish(),
            SnsHandle::Shared(_) => f.write_str("Shared(..)"),
        }
    }
}

#[derive(Debug)]
pub struct SnsTransport {
    sns: SnsHandle,
    platform_app_arn: Option<String>,
    platform: &'static str,
}

impl SnsTransport {
    /// Builds a transport. `None` behaves exactly like an empty config.
    ///
    /// Uses `config.sns` when given, otherwise creates an SDK client from
    /// `config.aws`.
    pub async fn new(config: Option<TransportConfig>) -> Self {
        let config = config.unwrap_or_default();
        let sns = match config.sns {
            Some(client) => SnsHandle::Shared(client),
            None => SnsHandle::Owned(AwsSnsClient::from_options(&config.aws).await),
        };

        Self {
            sns,
            platform_app_arn: config.platform_app_arn,
            platform: PLATFORM,
        }
    }

    #[must_use]
    pub fn with_client(client: Arc<dyn SnsApi>, platform_app_arn: Option<String>) -> Self {
        Self {
            sns: SnsHandle::Shared(client),
            platform_app_arn,
            platform: PLATFORM,
        }
    }

    pub fn platform(&self) -> &str {
        self.platform
    }

    pub fn platform_app_arn(&self) -> Option<&str> {
        self.platform_app_arn.as_deref()
    }

    pub fn client(&self) -> &SnsHandle {
        &self.sns
    }

    /// Sends `message` to `device`.
    ///
    /// The platform tag is checked before anything else; a mismatch fails here
    /// and no SNS call is made. Every SNS failure comes back through the
    /// returned future exactly as the client reported it, and a failed
    /// endpoint creation stops the send before publishing.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::UnsupportedPlatform`] if `platform` is not `"sns"`.
    pub fn send<'a>(
        &'a self,
        platform: &'a str,
        device: &'a str,
        message: &'a Message,
        options: &'a SendOptions,
    ) -> Result<
        impl Future<Output = Result<PublishResponse, TransportError>> + Send + 'a,
        TransportError,
    > {
        if platform != self.platform {
            return Err(TransportError::UnsupportedPlatform(platform.to_string()));
        }

        Ok(async move {
            let endpoint_arn = if options.is_endpoint {
                device.to_string()
            } else {
                self.create_endpoint(device, options).await?
            };
            self.publish(&endpoint_arn, message).await
        })
    }

    async fn create_endpoint(
        &self,
        device: &str,
        options: &SendOptions,
    ) -> Result<String, TransportError> {
        let platform_application_arn = options
            .platform_app_arn
            .clone()
            .or_else(|| self.platform_app_arn.clone());
        debug!(
            platform_application_arn = ?platform_application_arn,
            "Creating SNS platform endpoint"
        );

        let response = self
            .sns
            .api()
            .create_platform_endpoint(CreateEndpointRequest {
                platform_application_arn,
                token: device.to_string(),
            })
            .await
            .inspect_err(|e| error!("Failed to create SNS platform endpoint: {}", e))?;

        Ok(response.endpoint_arn)
    }

    async fn publish(
        &self,
        endpoint_arn: &str,
        message: &Message,
    ) -> Result<PublishResponse, TransportError> {
        let payload = build_payload(message)?;
        #[cfg(feature = "debug-logs")]
        debug!(payload = %payload, "SNS payload");

        let result = self
            .sns
            .api()
            .publish(PublishRequest::json(payload, endpoint_arn))
            .await;
        match &result {
            Ok(response) => info!(
                endpoint_arn = %endpoint_arn,
                message_id = ?response.message_id,
                "Published push notification"
            ),
            Err(e) => error!("Failed to publish to {}: {}", endpoint_arn, e),
        }
        result
    }
}

#[async_trait]
impl PushTransport for SnsTransport {
    fn platform(&self) -> &str {
        self.platform
    }

    async fn deliver(&self, request: &SendRequest) -> Result<PublishResponse, TransportError> {
        self.send(
            &request.platform,
            &request.device,
            &request.message,
            &request.options,
        )?
        .await
    }
}
