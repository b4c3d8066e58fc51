use std::error::Error;
use sns_push_transport::errors::TransportError;

#[test]
fn test_transport_error_implements_error_trait() {
    // Verify TransportError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = TransportError::MissingEndpointArn;
    assert_error(&error);
}

#[test]
fn test_transport_error_display() {
    let error = TransportError::UnsupportedPlatform("foo".to_string());
    assert_eq!(format!("{error}"), "platform foo not supported");

    let error = TransportError::AwsError("throttled".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: throttled"
    );

    let error = TransportError::ConfigError("SNS_PLATFORM_APP_ARN".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid transport configuration: SNS_PLATFORM_APP_ARN"
    );
}

#[test]
fn test_transport_error_from_conversions() {
    // Test conversion from serde_json::Error
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let transport_err: TransportError = err.into();

    match transport_err {
        TransportError::SerializationError(msg) => assert!(msg.contains("EOF")),
        _ => panic!("Unexpected error type"),
    }

    // Building an SdkError by hand needs a full HTTP response, so only check
    // that the conversion exists.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_sdk_conversion(
        err: aws_sdk_sns::error::SdkError<aws_sdk_sns::operation::publish::PublishError>,
    ) -> TransportError {
        TransportError::from(err)
    }
}

#[test]
fn test_transport_error_converts_to_lambda_error() {
    let err: lambda_runtime::Error = TransportError::MissingEndpointArn.into();
    assert_eq!(
        err.to_string(),
        "SNS returned no endpoint ARN for the device token"
    );
}
