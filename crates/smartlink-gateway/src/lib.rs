//! # smartlink-gateway
//!
//! Outbound HTTP for the Smartlink gateway. Two concerns live here:
//!
//! - [`token_exchange`] - the server-side OAuth 2.0 authorization-code
//!   grant against an external authorization server, keeping the client
//!   secret and the CORS problem away from the browser
//! - [`client`] - the authenticated, transparent tunnel to the external
//!   FHIR server
//!
//! Both are single request/response calls: no retries, no pooling
//! configuration beyond reqwest defaults, no streaming. A failed
//! upstream call is surfaced once, immediately.

pub mod client;
pub mod token_exchange;

mod error;

pub use client::FhirClient;
pub use error::UpstreamError;
pub use token_exchange::{TokenExchangeRequest, TokenExchanger};
