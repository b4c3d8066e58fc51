//! Client modules for external API interactions

pub mod sns_client;

pub use sns_client::{AwsSnsClient, SnsApi};
