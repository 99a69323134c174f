//! # smartlink-server
//!
//! The HTTP surface of the Smartlink gateway. Everything the browser
//! talks to lives here:
//!
//! - `POST /token-exchange` - server-side authorization-code grant
//! - `POST /session` - mint the encrypted session cookie from a grant
//! - `GET /fhir/{resource}` - authenticated, query-forwarding FHIR search
//! - `POST /clear-cookies` - session teardown
//! - `GET /auth-params` - client id and scopes for a launch
//! - `GET /`, `/healthz`, `/readyz` - liveness and readiness
//!
//! Handlers stay thin: they translate HTTP into calls on the session
//! store and the outbound clients, and map errors through [`ApiError`].

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod resources;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use resources::SupportedResource;
pub use server::{ServerBuilder, SmartlinkServer, build_app};
pub use state::AppState;
