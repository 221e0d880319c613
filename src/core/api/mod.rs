//! Remote API client for the Codestore platform.
//!
//! The platform owns all durable state; this module only carries requests
//! and responses across the wire. One method per remote endpoint, one HTTP
//! request per method, a bearer credential on every call.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
