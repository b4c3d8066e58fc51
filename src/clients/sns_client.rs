//! SNS API client module
//!
//! The transport only needs two SNS operations. They sit behind [`SnsApi`] so
//! a caller can hand in any implementation, including an in-memory one.

use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::operation::RequestId;
use tracing::debug;

use crate::core::config::AwsOptions;
use crate::core::models::{
    CreateEndpointRequest, CreateEndpointResponse, PublishRequest, PublishResponse,
};
use crate::errors::TransportError;

#[async_trait]
pub trait SnsApi: Send + Sync {
    /// Registers a device token under a platform application.
    async fn create_platform_endpoint(
        &self,
        request: CreateEndpointRequest,
    ) -> Result<CreateEndpointResponse, TransportError>;

    async fn publish(&self, request: PublishRequest) -> Result<PublishResponse, TransportError>;
}

/// [`SnsApi`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsSnsClient {
    client: Client,
}

impl AwsSnsClient {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads the shared AWS configuration from the environment and applies
    /// whatever `options` sets on top of it. Nothing is sent to SNS here.
    pub async fn from_options(options: &AwsOptions) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(profile_name) = &options.profile_name {
            loader = loader.profile_name(profile_name);
        }
        let shared_config = loader.load().await;

        Self::new(Client::new(&shared_config))
    }
}

#[async_trait]
impl SnsApi for AwsSnsClient {
    async fn create_platform_endpoint(
        &self,
        request: CreateEndpointRequest,
    ) -> Result<CreateEndpointResponse, TransportError> {
        let output = self
            .client
            .create_platform_endpoint()
            .set_platform_application_arn(request.platform_application_arn)
            .token(request.token)
            .send()
            .await?;

        let endpoint_arn = output
            .endpoint_arn()
            .ok_or(TransportError::MissingEndpointArn)?
            .to_string();
        debug!(endpoint_arn = %endpoint_arn, "SNS platform endpoint ready");

        Ok(CreateEndpointResponse { endpoint_arn })
    }

    async fn publish(&self, request: PublishRequest) -> Result<PublishResponse, TransportError> {
        let output = self
            .client
            .publish()
            .message(request.message)
            .message_structure(request.message_structure)
            .target_arn(request.target_arn)
            .send()
            .await?;

        Ok(PublishResponse {
            message_id: output.message_id().map(str::to_string),
            request_id: output.request_id().map(str::to_string),
        })
    }
}
