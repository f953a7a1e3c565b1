//! Client-side session core for the hotel booking app.
//!
//! This crate owns everything the browser app needs that is not rendering:
//! the persisted bearer token, claim decoding, the session state machine,
//! route-guard decisions, the authenticated request pipeline, and the REST
//! service functions over it. It has no browser dependencies; the `client`
//! crate plugs in `localStorage`, `window.location`, and fetch through the
//! [`store::TokenStore`], [`http::Navigator`], and [`http::Transport`] seams.

pub mod api;
pub mod claims;
pub mod clock;
pub mod error;
pub mod guard;
pub mod http;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use claims::{Claims, DecodeError, decode};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApiError, ApiErrorDetail, ErrorMessage, TransportError};
pub use guard::{Access, GuardDecision};
pub use http::{ApiRequest, ApiResponse, HttpClient, Method, Navigator, Transport};
pub use session::{CurrentUser, SessionError, SessionSnapshot, SessionState, SessionStore, SubscriptionId};
pub use store::{MemoryStorage, MemoryTokenStore, StoreError, TokenStore};
pub use types::Role;
