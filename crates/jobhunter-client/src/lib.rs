//! Client for the JobHunter signup and trial status API.

mod client;
mod error;
mod types;

pub use client::JobHunterClient;
pub use error::ApiError;
pub use types::*;
