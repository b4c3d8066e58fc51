use aws_sdk_sns::error::DisplayErrorContext;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("platform {0} not supported")]
    UnsupportedPlatform(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("SNS returned no endpoint ARN for the device token")]
    MissingEndpointArn,

    #[error("Failed to serialize notification payload: {0}")]
    SerializationError(String),

    #[error("Invalid transport configuration: {0}")]
    ConfigError(String),
}

// Generic implementation for AWS SDK errors. `Display` on `SdkError` stops at
// "service error", so the whole source chain is rendered to keep the SNS code
// and message.
impl<E> From<aws_sdk_sns::error::SdkError<E>> for TransportError
where
    E: std::error::Error + 'static,
{
    fn from(error: aws_sdk_sns::error::SdkError<E>) -> Self {
        TransportError::AwsError(DisplayErrorContext(&error).to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        TransportError::SerializationError(error.to_string())
    }
}
