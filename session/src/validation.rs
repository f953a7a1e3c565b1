//! Client-side form validation, run before any request is sent.
//!
//! Rejections carry the exact one-line message the view displays.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::types::{CreateHotelDto, HotelQuery, LoginDto};

pub const DATES_REQUIRED: &str = "Please select both check-in and check-out dates";
pub const DATES_MALFORMED: &str = "Dates must use the YYYY-MM-DD format";
pub const CHECK_OUT_NOT_AFTER_CHECK_IN: &str = "Check-out date must be after check-in date";
pub const CHECK_IN_IN_PAST: &str = "Check-in date cannot be in the past";
pub const NO_ROOMS_AVAILABLE: &str = "Sorry, no rooms available for booking at this hotel";

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub const HOTEL_NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const HOTEL_LOCATION_TOO_SHORT: &str = "Location must be at least 3 characters";
pub const HOTEL_PRICE_INVALID: &str = "Price per night must be a valid non-negative number";
pub const HOTEL_ROOMS_INVALID: &str = "Available rooms must be a valid non-negative whole number";

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;
const MIN_HOTEL_FIELD_LEN: usize = 3;

/// A validated check-in/check-out pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: Date,
    pub check_out: Date,
}

impl StayDates {
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }
}

/// Parse a `YYYY-MM-DD` date; a trailing time part (ISO timestamps) is ignored.
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    let value = value.trim();
    let day = value.get(..10).unwrap_or(value);
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// `YYYY-MM-DD` form used by date inputs and the booking API.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Human form, e.g. `01 Nov 2026`. Unparseable input is returned as-is.
#[must_use]
pub fn display_date(value: &str) -> String {
    parse_date(value)
        .and_then(|d| d.format(format_description!("[day] [month repr:short] [year]")).ok())
        .unwrap_or_else(|| value.to_owned())
}

/// The UTC calendar date for a Unix timestamp in milliseconds.
#[must_use]
pub fn utc_date(now_millis: i64) -> Option<Date> {
    OffsetDateTime::from_unix_timestamp(now_millis.div_euclid(1000))
        .ok()
        .map(OffsetDateTime::date)
}

/// Validate a booking request before it is sent.
///
/// # Errors
///
/// Returns the message to display when a date is missing or malformed,
/// check-out is not after check-in, check-in is before `today`, or the hotel
/// has no rooms left.
pub fn validate_booking(
    check_in: &str,
    check_out: &str,
    today: Date,
    available_rooms: i64,
) -> Result<StayDates, &'static str> {
    if check_in.trim().is_empty() || check_out.trim().is_empty() {
        return Err(DATES_REQUIRED);
    }
    let (Some(check_in), Some(check_out)) = (parse_date(check_in), parse_date(check_out)) else {
        return Err(DATES_MALFORMED);
    };
    if check_out <= check_in {
        return Err(CHECK_OUT_NOT_AFTER_CHECK_IN);
    }
    if check_in < today {
        return Err(CHECK_IN_IN_PAST);
    }
    if available_rooms <= 0 {
        return Err(NO_ROOMS_AVAILABLE);
    }
    Ok(StayDates { check_in, check_out })
}

/// Nights and estimated total for the live booking summary; `None` until
/// both dates parse and check-out is after check-in.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_stay(check_in: &str, check_out: &str, price_per_night: f64) -> Option<(i64, f64)> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    if check_out <= check_in {
        return None;
    }
    let nights = StayDates { check_in, check_out }.nights();
    Some((nights, nights as f64 * price_per_night))
}

/// Validate login or registration input. `confirmation` is `Some` on the
/// registration form.
///
/// # Errors
///
/// Returns the message to display for a short username or password, or a
/// confirmation that does not match.
pub fn validate_credentials(
    username: &str,
    password: &str,
    confirmation: Option<&str>,
) -> Result<LoginDto, &'static str> {
    let username = username.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(USERNAME_TOO_SHORT);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if confirmation.is_some_and(|c| c != password) {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    Ok(LoginDto { username: username.to_owned(), password: password.to_owned() })
}

/// Raw text fields of the admin hotel form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelFormInput {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: String,
    pub available_rooms: String,
    pub image_url: String,
}

/// Validate the admin hotel form into a create/update body.
///
/// # Errors
///
/// Returns the message to display for short name/location, a negative or
/// non-numeric price, or a room count that is not a non-negative integer.
pub fn validate_hotel_form(input: &HotelFormInput) -> Result<CreateHotelDto, &'static str> {
    let name = input.name.trim();
    let location = input.location.trim();
    if name.chars().count() < MIN_HOTEL_FIELD_LEN {
        return Err(HOTEL_NAME_TOO_SHORT);
    }
    if location.chars().count() < MIN_HOTEL_FIELD_LEN {
        return Err(HOTEL_LOCATION_TOO_SHORT);
    }
    let price = input
        .price_per_night
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or(HOTEL_PRICE_INVALID)?;
    let rooms = input
        .available_rooms
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|r| *r >= 0)
        .ok_or(HOTEL_ROOMS_INVALID)?;
    Ok(CreateHotelDto {
        name: name.to_owned(),
        location: location.to_owned(),
        description: non_blank(&input.description),
        price_per_night: price,
        available_rooms: rooms,
        image_url: non_blank(&input.image_url),
    })
}

/// Build the hotel search query from the filter form. Blank or unparseable
/// fields are left out; availability is `""`, `"true"`, or `"false"`.
#[must_use]
pub fn hotel_query_from_filters(location: &str, min_price: &str, max_price: &str, available: &str) -> HotelQuery {
    let price = |raw: &str| raw.trim().parse::<f64>().ok().filter(|p| p.is_finite());
    HotelQuery {
        location: non_blank(location),
        min_price: price(min_price),
        max_price: price(max_price),
        available: match available {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
