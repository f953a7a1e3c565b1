use time::macros::date;

use super::*;

const TODAY: Date = date!(2026 - 10 - 16);

// =============================================================
// booking dates
// =============================================================

#[test]
fn booking_requires_both_dates() {
    assert_eq!(validate_booking("", "2026-10-20", TODAY, 3), Err(DATES_REQUIRED));
    assert_eq!(validate_booking("2026-10-18", "  ", TODAY, 3), Err(DATES_REQUIRED));
}

#[test]
fn booking_rejects_malformed_dates() {
    assert_eq!(validate_booking("18/10/2026", "2026-10-20", TODAY, 3), Err(DATES_MALFORMED));
}

#[test]
fn booking_rejects_check_out_on_or_before_check_in() {
    assert_eq!(
        validate_booking("2026-10-20", "2026-10-20", TODAY, 3),
        Err("Check-out date must be after check-in date")
    );
    assert_eq!(
        validate_booking("2026-10-20", "2026-10-19", TODAY, 3),
        Err(CHECK_OUT_NOT_AFTER_CHECK_IN)
    );
}

#[test]
fn booking_rejects_past_check_in() {
    assert_eq!(validate_booking("2026-10-15", "2026-10-17", TODAY, 3), Err(CHECK_IN_IN_PAST));
}

#[test]
fn booking_allows_check_in_today() {
    let stay = validate_booking("2026-10-16", "2026-10-19", TODAY, 1).unwrap();
    assert_eq!(stay.nights(), 3);
}

#[test]
fn booking_rejects_sold_out_hotel() {
    assert_eq!(validate_booking("2026-10-17", "2026-10-18", TODAY, 0), Err(NO_ROOMS_AVAILABLE));
}

#[test]
fn estimate_multiplies_nights_by_price() {
    assert_eq!(estimate_stay("2026-11-01", "2026-11-04", 500_000.0), Some((3, 1_500_000.0)));
    assert_eq!(estimate_stay("2026-11-04", "2026-11-01", 500_000.0), None);
    assert_eq!(estimate_stay("", "2026-11-01", 500_000.0), None);
}

#[test]
fn dates_parse_iso_timestamps_and_format_for_display() {
    assert_eq!(parse_date("2026-11-01T00:00:00.000Z"), Some(date!(2026 - 11 - 01)));
    assert_eq!(display_date("2026-11-01"), "01 Nov 2026");
    assert_eq!(display_date("someday"), "someday");
    assert_eq!(format_date(date!(2026 - 01 - 05)), "2026-01-05");
}

#[test]
fn utc_date_truncates_to_calendar_day() {
    assert_eq!(utc_date(1_792_108_800_000 + 86_399_999), Some(TODAY));
}

// =============================================================
// credentials
// =============================================================

#[test]
fn credentials_trim_username() {
    let dto = validate_credentials("  alice ", "secret1", None).unwrap();
    assert_eq!(dto.username, "alice");
    assert_eq!(dto.password, "secret1");
}

#[test]
fn credentials_enforce_minimum_lengths() {
    assert_eq!(validate_credentials("al", "secret1", None), Err(USERNAME_TOO_SHORT));
    assert_eq!(validate_credentials("alice", "short", None), Err(PASSWORD_TOO_SHORT));
}

#[test]
fn registration_requires_matching_confirmation() {
    assert_eq!(
        validate_credentials("alice", "secret1", Some("secret2")),
        Err(PASSWORDS_DO_NOT_MATCH)
    );
    assert!(validate_credentials("alice", "secret1", Some("secret1")).is_ok());
}

// =============================================================
// hotel form and filters
// =============================================================

fn hotel_input() -> HotelFormInput {
    HotelFormInput {
        name: "Ubud Retreat".to_owned(),
        location: "Bali".to_owned(),
        description: "  ".to_owned(),
        price_per_night: "750000".to_owned(),
        available_rooms: "4".to_owned(),
        image_url: String::new(),
    }
}

#[test]
fn hotel_form_builds_dto_and_drops_blank_optionals() {
    let dto = validate_hotel_form(&hotel_input()).unwrap();
    assert_eq!(dto.name, "Ubud Retreat");
    assert_eq!(dto.price_per_night, 750_000.0);
    assert_eq!(dto.available_rooms, 4);
    assert_eq!(dto.description, None);
    assert_eq!(dto.image_url, None);
}

#[test]
fn hotel_form_rejects_bad_numbers() {
    let mut input = hotel_input();
    input.price_per_night = "-1".to_owned();
    assert_eq!(validate_hotel_form(&input), Err(HOTEL_PRICE_INVALID));

    let mut input = hotel_input();
    input.available_rooms = "2.5".to_owned();
    assert_eq!(validate_hotel_form(&input), Err(HOTEL_ROOMS_INVALID));

    let mut input = hotel_input();
    input.available_rooms = "-3".to_owned();
    assert_eq!(validate_hotel_form(&input), Err(HOTEL_ROOMS_INVALID));
}

#[test]
fn hotel_form_rejects_short_name_and_location() {
    let mut input = hotel_input();
    input.name = "Ab".to_owned();
    assert_eq!(validate_hotel_form(&input), Err(HOTEL_NAME_TOO_SHORT));

    let mut input = hotel_input();
    input.location = " x ".to_owned();
    assert_eq!(validate_hotel_form(&input), Err(HOTEL_LOCATION_TOO_SHORT));
}

#[test]
fn filters_skip_blank_and_unparseable_fields() {
    let query = hotel_query_from_filters(" Bali ", "abc", "2000000", "false");
    assert_eq!(
        query,
        HotelQuery {
            location: Some("Bali".to_owned()),
            min_price: None,
            max_price: Some(2_000_000.0),
            available: Some(false),
        }
    );
    assert_eq!(hotel_query_from_filters("", "", "", ""), HotelQuery::default());
}
