//! # smartlink-session
//!
//! Encrypted cookie sessions: there is no server-side session table, so
//! the whole authenticated state travels inside one AES-256-GCM-sealed
//! cookie. This crate owns every byte of that cookie's format; the rest
//! of the system only ever sees a typed [`SessionRecord`].
//!
//! ## Modules
//!
//! - [`codec`] - seal/open a `SessionRecord` as an opaque base64 blob
//! - [`store`] - read the session cookie from a request, issue new ones
//! - [`teardown`] - the fixed set of clear cookies emitted on logout
//!
//! [`SessionRecord`]: smartlink_core::SessionRecord

pub mod codec;
pub mod store;
pub mod teardown;

mod error;

pub use codec::SessionCodec;
pub use error::SessionError;
pub use store::{SessionStore, bearer_header};
pub use teardown::{LEGACY_COOKIE_NAMES, clear_cookies};
