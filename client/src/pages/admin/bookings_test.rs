use serde_json::json;

use super::*;

fn booking(id: &str, status: &str) -> Booking {
    serde_json::from_value(json!({
        "id": id,
        "userId": "u1",
        "hotelId": "h1",
        "checkInDate": "2026-11-01",
        "checkOutDate": "2026-11-03",
        "totalPrice": 1500000,
        "status": status,
        "createdAt": "2026-10-16T00:00:00.000Z",
        "updatedAt": "2026-10-16T00:00:00.000Z",
        "hotel": {
            "id": "h1",
            "name": "Ubud Retreat",
            "location": "Bali",
            "pricePerNight": 750000,
            "availableRooms": 3,
            "createdAt": "2026-10-01T00:00:00.000Z",
            "updatedAt": "2026-10-01T00:00:00.000Z"
        }
    }))
    .unwrap()
}

#[test]
fn filter_trims_ids_and_parses_status() {
    let query = booking_filter(" u1 ", "", "confirmed");
    assert_eq!(
        query,
        BookingQuery {
            user_id: Some("u1".to_owned()),
            hotel_id: None,
            status: Some(BookingStatus::Confirmed),
        }
    );
}

#[test]
fn blank_filter_is_the_default_query() {
    assert_eq!(booking_filter("  ", "", ""), BookingQuery::default());
    assert_eq!(booking_filter("", "", "unknown").status, None);
}

#[test]
fn apply_status_updates_only_the_matching_row() {
    let mut list = vec![booking("b1", "pending"), booking("b2", "pending")];
    let mut updated = booking("b2", "confirmed");
    updated.updated_at = "2026-10-17T00:00:00.000Z".to_owned();

    apply_status(&mut list, &updated);

    assert_eq!(list[0].status, BookingStatus::Pending);
    assert_eq!(list[1].status, BookingStatus::Confirmed);
    assert_eq!(list[1].updated_at, "2026-10-17T00:00:00.000Z");
}
