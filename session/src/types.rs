//! Wire DTOs for the hotel booking REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Entities are snapshots
//! owned by the server; the client only holds them in view-local state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Account role carried in the token claims and user records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the lowercase wire form; anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as returned by `/users` and the login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`; same shape as login.
pub type RegisterDto = LoginDto;

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Admin update of a user record. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Decimal columns arrive either as JSON numbers or as numeric strings
/// such as `"1500000.00"`.
fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(value) => Ok(value),
        Wire::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| de::Error::custom(format!("invalid decimal string {text:?}"))),
    }
}

/// A hotel listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "decimal")]
    pub price_per_night: f64,
    pub available_rooms: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `POST /hotels`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelDto {
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_night: f64,
    pub available_rooms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `PATCH /hotels/:id`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_rooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<CreateHotelDto> for UpdateHotelDto {
    fn from(dto: CreateHotelDto) -> Self {
        Self {
            name: Some(dto.name),
            location: Some(dto.location),
            description: dto.description,
            price_per_night: Some(dto.price_per_night),
            available_rooms: Some(dto.available_rooms),
            image_url: dto.image_url,
        }
    }
}

/// Filters for `GET /hotels`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelQuery {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub available: Option<bool>,
}

impl HotelQuery {
    /// Query-string pairs for the populated filters, in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(location) = &self.location {
            pairs.push(("location".to_owned(), location.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_owned(), min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_owned(), max.to_string()));
        }
        if let Some(available) = self.available {
            pairs.push(("available".to_owned(), available.to_string()));
        }
        pairs
    }
}

/// Lifecycle of a booking as tracked by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Whether the guest may still cancel a booking in this state.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking with its hotel (and, for admin listings, its user) embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub hotel_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    #[serde(deserialize_with = "decimal")]
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub hotel: Hotel,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub hotel_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Body of `PATCH /bookings/:id/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

/// Filters for the admin `GET /bookings/all` listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingQuery {
    pub user_id: Option<String>,
    pub hotel_id: Option<String>,
    pub status: Option<BookingStatus>,
}

impl BookingQuery {
    /// Query-string pairs; blank ids are dropped after trimming.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let trimmed = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        if let Some(user_id) = trimmed(&self.user_id) {
            pairs.push(("userId".to_owned(), user_id));
        }
        if let Some(hotel_id) = trimmed(&self.hotel_id) {
            pairs.push(("hotelId".to_owned(), hotel_id));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_owned(), status.as_str().to_owned()));
        }
        pairs
    }
}
