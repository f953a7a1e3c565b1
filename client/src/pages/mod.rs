//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and actions and delegates rendering
//! details to `components`. Protected pages are wrapped in
//! `components::protected::Protected` by the router, not by the page.

pub mod admin;
pub mod home;
pub mod hotel_detail;
pub mod hotels;
pub mod login;
pub mod my_bookings;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod unauthorized;
