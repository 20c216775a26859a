//! Baynext Console core - the bridge between a browser session and a backend
//! service call.
//!
//! Two components, composed linearly for every authenticated call:
//!
//! 1. A credential issuer that turns an established login [`Session`] into a
//!    signed, time-bounded bearer [`Credential`].
//! 2. An authenticated request client that attaches that credential to every
//!    outbound request, classifies transport/HTTP failures into a single
//!    [`ApiError`] taxonomy, and decodes responses by declared content type.
//!
//! Everything else about the console (pages, navigation, rendering) lives
//! outside this crate and consumes it through [`adapters::api::ApiClient`].
//!
//! [`Session`]: domain::Session
//! [`Credential`]: domain::Credential
//! [`ApiError`]: domain::ApiError

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
