//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access and pure display helpers used
//! by pages and components.

pub mod auth;
pub mod browser;
pub mod format;
pub mod storage;
