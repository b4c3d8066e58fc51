// This is the Lambda bootstrap entry point for the send function

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use sns_push_transport::core::config::TransportConfig;
use sns_push_transport::core::models::SendRequest;
use sns_push_transport::{SnsTransport, api};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sns_push_transport::setup_logging();

    let config = TransportConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    // Built once and reused by every invocation of this instance.
    let transport = SnsTransport::new(Some(config)).await;
    let transport = &transport;

    run(service_fn(move |event: LambdaEvent<SendRequest>| async move {
        api::handler(transport, event).await
    }))
    .await
}
