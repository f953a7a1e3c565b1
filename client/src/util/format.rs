//! Display formatting for prices, ids, and booking lists.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use session::types::{Booking, BookingStatus};

/// Whole-rupiah amount with thousands separators, e.g. `Rp 1,500,000`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let whole = if rounded.is_finite() { rounded.abs() as u64 } else { 0 };
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("Rp {sign}{grouped}")
}

/// First eight characters of an id followed by an ellipsis.
pub fn short_id(id: &str) -> String {
    match id.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_owned(),
    }
}

/// `text` cut to `max` characters, with an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Order bookings by creation time, newest first.
pub fn newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "status-badge status-badge--pending",
        BookingStatus::Confirmed => "status-badge status-badge--confirmed",
        BookingStatus::Cancelled => "status-badge status-badge--cancelled",
    }
}

/// Capitalized status label.
pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "Pending",
        BookingStatus::Confirmed => "Confirmed",
        BookingStatus::Cancelled => "Cancelled",
    }
}

pub fn availability_label(rooms: i64) -> String {
    match rooms {
        r if r <= 0 => "Fully booked".to_owned(),
        1 => "1 room available".to_owned(),
        r => format!("{r} rooms available"),
    }
}
