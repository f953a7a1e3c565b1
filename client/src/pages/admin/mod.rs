//! Admin-only management pages, mounted behind `Access::admin()`.

pub mod bookings;
pub mod hotels;
pub mod users;
