//! Lambda entrypoint for delivering send requests

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
