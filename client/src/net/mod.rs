//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves `session::ApiRequest`s over browser fetch. Endpoints,
//! auth headers, and error mapping live in the `session` crate.

pub mod transport;
