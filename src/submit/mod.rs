//! Submission module for the outbound lead capture call

mod client;
mod traits;

pub use client::HttpSubmitClient;
pub use traits::{SubmitClient, SubmitError};

#[cfg(test)]
pub use traits::MockSubmitClient;
