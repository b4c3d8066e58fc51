//! SNS push transport - delivers push notifications through AWS SNS platform endpoints.
//!
//! A generic push dispatcher hands this crate a `(platform, device, message,
//! options)` send request. The transport turns it into at most two SNS calls:
//! 1. `CreatePlatformEndpoint` to register the device token (skipped when the
//!    device is already an endpoint ARN)
//! 2. `Publish` of an APNS-formatted payload to that endpoint
//!
//! # Architecture
//!
//! The system uses:
//! - `aws-sdk-sns` for the SNS API, behind the [`SnsApi`] trait
//! - AWS Lambda (optional `lambda` feature) as a ready-made host for the transport
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use sns_push_transport::core::config::{SendOptions, TransportConfig};
//! use sns_push_transport::core::models::Message;
//! use sns_push_transport::SnsTransport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sns_push_transport::setup_logging();
//!
//!     let config = TransportConfig {
//!         platform_app_arn: Some(
//!             "arn:aws:sns:us-east-1:999999999999:app/APNS_SANDBOX/PushApp".to_string(),
//!         ),
//!         ..TransportConfig::default()
//!     };
//!     let transport = SnsTransport::new(Some(config)).await;
//!
//!     let response = transport
//!         .send("sns", "device-token", &Message::alert("hello"), &SendOptions::default())?
//!         .await?;
//!     println!("Published message {:?}", response.message_id);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod transport;

pub use clients::{AwsSnsClient, SnsApi};
pub use errors::TransportError;
pub use transport::{PLATFORM, PushTransport, SnsHandle, SnsTransport};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup.
///
/// # Example
///
/// ```
/// sns_push_transport::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
