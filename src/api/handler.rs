//! Lambda handler that forwards a send request to a push transport.

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use crate::core::models::{PublishResponse, SendRequest};
use crate::transport::PushTransport;

pub use self::function_handler as handler;

/// Lambda handler for the send entrypoint.
///
/// # Errors
///
/// Returns an error if the request names a platform the transport does not
/// serve, or if SNS rejects the endpoint creation or the publish.
#[tracing::instrument(
    level = "info",
    skip(transport, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<T>(
    transport: &T,
    event: LambdaEvent<SendRequest>,
) -> Result<PublishResponse, Error>
where
    T: PushTransport + ?Sized,
{
    let request = event.payload;
    info!(
        platform = %request.platform,
        is_endpoint = request.options.is_endpoint,
        "Send request received"
    );

    transport.deliver(&request).await.map_err(|e| {
        error!("Send failed: {}", e);
        Error::from(e)
    })
}
