//! REST service functions for the booking backend.
//!
//! Each call goes through [`HttpClient`], so bearer attachment and the
//! unauthorized side-channel apply uniformly. Functions return the decoded
//! entity or an [`ApiError`]; views turn errors into a one-line message with
//! [`ApiError::user_message`].
//!
//! ERROR HANDLING
//! ==============
//! [`book_hotel`] validates locally first and never touches the network for
//! input the backend would reject anyway.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use time::Date;

use crate::error::ApiError;
use crate::http::{ApiRequest, HttpClient, Transport};
use crate::types::{
    AuthResponse, Booking, BookingQuery, BookingStatus, CreateBookingDto, CreateHotelDto, Hotel,
    HotelQuery, LoginDto, MessageResponse, RegisterDto, UpdateBookingStatusDto, UpdateHotelDto,
    UpdateUserDto, User,
};
use crate::validation;

pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";

fn hotel_endpoint(id: &str) -> String {
    format!("/hotels/{id}")
}

fn booking_endpoint(id: &str) -> String {
    format!("/bookings/{id}")
}

fn booking_cancel_endpoint(id: &str) -> String {
    format!("/bookings/{id}/cancel")
}

fn booking_status_endpoint(id: &str) -> String {
    format!("/bookings/{id}/status")
}

fn user_endpoint(id: &str) -> String {
    format!("/users/{id}")
}

fn my_bookings_query(status: Option<BookingStatus>) -> Vec<(String, String)> {
    status
        .map(|s| vec![("status".to_owned(), s.as_str().to_owned())])
        .unwrap_or_default()
}

/// Message from a delete acknowledgement; empty or shapeless bodies fall
/// back to `default`.
fn ack_message(body: &str, default: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .map(|ack| ack.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`. The caller hands the result to `SessionStore::login`.
pub async fn login<T: Transport>(client: &HttpClient<T>, dto: &LoginDto) -> Result<AuthResponse, ApiError> {
    client.send_json(ApiRequest::post("/auth/login").json(dto)?).await
}

/// `POST /auth/register`.
pub async fn register<T: Transport>(client: &HttpClient<T>, dto: &RegisterDto) -> Result<User, ApiError> {
    client.send_json(ApiRequest::post("/auth/register").json(dto)?).await
}

/// `GET /auth/profile`: the claims the backend sees for the current token.
pub async fn profile<T: Transport>(client: &HttpClient<T>) -> Result<serde_json::Value, ApiError> {
    client.send_json(ApiRequest::get("/auth/profile")).await
}

// =============================================================================
// HOTELS
// =============================================================================

pub async fn list_hotels<T: Transport>(client: &HttpClient<T>, query: &HotelQuery) -> Result<Vec<Hotel>, ApiError> {
    client.send_json(ApiRequest::get("/hotels").query(query.to_pairs())).await
}

pub async fn get_hotel<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<Hotel, ApiError> {
    client.send_json(ApiRequest::get(hotel_endpoint(id))).await
}

pub async fn create_hotel<T: Transport>(client: &HttpClient<T>, dto: &CreateHotelDto) -> Result<Hotel, ApiError> {
    client.send_json(ApiRequest::post("/hotels").json(dto)?).await
}

pub async fn update_hotel<T: Transport>(
    client: &HttpClient<T>,
    id: &str,
    dto: &UpdateHotelDto,
) -> Result<Hotel, ApiError> {
    client.send_json(ApiRequest::patch(hotel_endpoint(id)).json(dto)?).await
}

pub async fn delete_hotel<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<(), ApiError> {
    client.send_empty(ApiRequest::delete(hotel_endpoint(id))).await.map(drop)
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Failure of a validated booking attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl BookingError {
    /// One-line message for the booking form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(message) => (*message).to_owned(),
            Self::Api(err) => err.user_message("Failed to create booking"),
        }
    }
}

pub async fn create_booking<T: Transport>(client: &HttpClient<T>, dto: &CreateBookingDto) -> Result<Booking, ApiError> {
    client.send_json(ApiRequest::post("/bookings").json(dto)?).await
}

/// Validate the stay against `today` and the hotel's availability, then
/// create the booking.
pub async fn book_hotel<T: Transport>(
    client: &HttpClient<T>,
    hotel: &Hotel,
    check_in: &str,
    check_out: &str,
    today: Date,
) -> Result<Booking, BookingError> {
    let stay = validation::validate_booking(check_in, check_out, today, hotel.available_rooms)
        .map_err(BookingError::Invalid)?;
    let dto = CreateBookingDto {
        hotel_id: hotel.id.clone(),
        check_in_date: validation::format_date(stay.check_in),
        check_out_date: validation::format_date(stay.check_out),
    };
    Ok(create_booking(client, &dto).await?)
}

/// `GET /bookings/my-bookings`, optionally filtered by status.
pub async fn my_bookings<T: Transport>(
    client: &HttpClient<T>,
    status: Option<BookingStatus>,
) -> Result<Vec<Booking>, ApiError> {
    client
        .send_json(ApiRequest::get("/bookings/my-bookings").query(my_bookings_query(status)))
        .await
}

pub async fn get_booking<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<Booking, ApiError> {
    client.send_json(ApiRequest::get(booking_endpoint(id))).await
}

pub async fn cancel_booking<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<Booking, ApiError> {
    client.send_json(ApiRequest::patch(booking_cancel_endpoint(id))).await
}

/// Admin listing of every booking.
pub async fn all_bookings<T: Transport>(client: &HttpClient<T>, query: &BookingQuery) -> Result<Vec<Booking>, ApiError> {
    client.send_json(ApiRequest::get("/bookings/all").query(query.to_pairs())).await
}

pub async fn update_booking_status<T: Transport>(
    client: &HttpClient<T>,
    id: &str,
    status: BookingStatus,
) -> Result<Booking, ApiError> {
    let body = UpdateBookingStatusDto { status };
    client.send_json(ApiRequest::patch(booking_status_endpoint(id)).json(&body)?).await
}

// =============================================================================
// USERS
// =============================================================================

pub async fn list_users<T: Transport>(client: &HttpClient<T>) -> Result<Vec<User>, ApiError> {
    client.send_json(ApiRequest::get("/users")).await
}

pub async fn get_user<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<User, ApiError> {
    client.send_json(ApiRequest::get(user_endpoint(id))).await
}

pub async fn update_user<T: Transport>(client: &HttpClient<T>, id: &str, dto: &UpdateUserDto) -> Result<User, ApiError> {
    client.send_json(ApiRequest::patch(user_endpoint(id)).json(dto)?).await
}

/// Delete a user; returns the backend's acknowledgement message.
pub async fn delete_user<T: Transport>(client: &HttpClient<T>, id: &str) -> Result<String, ApiError> {
    let body = client.send_empty(ApiRequest::delete(user_endpoint(id))).await?;
    Ok(ack_message(&body, USER_DELETED_MESSAGE))
}

/// `GET /users/me`: the full record of the signed-in user.
pub async fn my_profile<T: Transport>(client: &HttpClient<T>) -> Result<User, ApiError> {
    client.send_json(ApiRequest::get("/users/me")).await
}
