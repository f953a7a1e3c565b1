//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms, cards, and navigation chrome while reading
//! shared state from Leptos context providers.

pub mod auth_form;
pub mod booking_form;
pub mod hotel_card;
pub mod hotel_form;
pub mod navbar;
pub mod notice;
pub mod protected;
