//! Date-range booking form on the hotel detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows a live nights/total estimate while dates are edited. Submission runs
//! `session::api::book_hotel`, which rejects bad input before any request is
//! sent; a successful booking redirects to the user's bookings after a short
//! confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::api::{BookingError, book_hotel};
use session::types::Hotel;
use session::validation::{estimate_stay, format_date};

use crate::app::use_api;
use crate::util::browser;
use crate::util::format::rupiah;

const MY_BOOKINGS_PATH: &str = "/my-bookings";
/// How long the confirmation stays up before redirecting.
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u32 = 3_500;

#[component]
pub fn BookingForm(hotel: Hotel) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let booked = RwSignal::new(false);

    Effect::new(move || {
        if booked.get() {
            navigate(MY_BOOKINGS_PATH, NavigateOptions::default());
        }
    });

    let price = hotel.price_per_night;
    let estimate = move || estimate_stay(&check_in.get(), &check_out.get(), price);
    let min_date = browser::today().map(format_date).unwrap_or_default();
    let min_check_in = min_date.clone();
    let min_check_out = move || {
        let from = check_in.get();
        if from.is_empty() { min_date.clone() } else { from }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);
        let Some(today) = browser::today() else {
            error.set(Some("Could not determine today's date".to_owned()));
            return;
        };
        let client = api.client();
        let hotel = hotel.clone();
        let (cin, cout) = (check_in.get_untracked(), check_out.get_untracked());
        busy.set(true);
        spawn_local(async move {
            match book_hotel(&client, &hotel, &cin, &cout, today).await {
                Ok(booking) => {
                    success.set(Some(format!(
                        "Booking successful! Your booking ID is {}. Total Price: {}. You will be redirected to your bookings page.",
                        booking.id,
                        rupiah(booking.total_price)
                    )));
                    check_in.set(String::new());
                    check_out.set(String::new());
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    booked.set(true);
                }
                Err(e) => {
                    if let BookingError::Api(api_err) = &e {
                        log::error!("booking failed: {api_err}");
                    }
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <h3>"Book Your Stay"</h3>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || success.get().is_some()>
                <p class="success-message">{move || success.get().unwrap_or_default()}</p>
            </Show>
            <label class="form-field">
                "Check-in Date"
                <input
                    class="form-input"
                    type="date"
                    min=min_check_in
                    prop:value=move || check_in.get()
                    on:input=move |ev| check_in.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                "Check-out Date"
                <input
                    class="form-input"
                    type="date"
                    min=min_check_out
                    prop:value=move || check_out.get()
                    on:input=move |ev| check_out.set(event_target_value(&ev))
                />
            </label>
            {move || {
                estimate()
                    .map(|(nights, total)| {
                        view! {
                            <p class="booking-form__estimate">
                                {format!("{nights} night(s) · Estimated total: ")}
                                <strong>{rupiah(total)}</strong>
                            </p>
                        }
                    })
            }}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Booking..." } else { "Book Now" }}
            </button>
        </form>
    }
}
