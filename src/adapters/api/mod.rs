//! Authenticated backend client.
//!
//! One logical backend call = resolve credential, attach headers, perform the
//! transport call once, classify the outcome:
//!
//! - `request` - the [`ApiRequest`] descriptor and [`ApiBody`] result
//! - `client` - the [`ApiClient`] pipeline and verb wrappers

mod client;
mod request;

pub use client::ApiClient;
pub use request::{ApiBody, ApiRequest};
