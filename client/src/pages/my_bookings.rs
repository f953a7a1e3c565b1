//! The signed-in user's bookings, newest first, with cancellation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::{cancel_booking, my_bookings};
use session::types::{Booking, BookingStatus};
use session::validation::display_date;

use crate::app::use_api;
use crate::components::notice::{Notice, NoticeLine};
use crate::util::browser;
use crate::util::format::{newest_first, rupiah, short_id, status_class, status_label};

const CANCEL_PROMPT: &str = "Are you sure you want to cancel this booking? This action cannot be undone.";

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let api = use_api();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(None::<BookingStatus>);
    let cancelling = RwSignal::new(None::<String>);
    let action = RwSignal::new(None::<Notice>);

    let load = move || {
        loading.set(true);
        error.set(None);
        let client = api.client();
        let status = status_filter.get_untracked();
        spawn_local(async move {
            match my_bookings(&client, status).await {
                Ok(mut list) => {
                    newest_first(&mut list);
                    bookings.set(list);
                }
                Err(e) => {
                    log::error!("fetching bookings failed: {e}");
                    error.set(Some(e.user_message("Failed to fetch your bookings")));
                }
            }
            loading.set(false);
        });
    };
    load();

    let on_cancel = move |id: String| {
        if cancelling.get_untracked().is_some() || !browser::confirm(CANCEL_PROMPT) {
            return;
        }
        cancelling.set(Some(id.clone()));
        action.set(None);
        let client = api.client();
        spawn_local(async move {
            match cancel_booking(&client, &id).await {
                Ok(_) => {
                    action.set(Some(Notice::Success("Booking cancelled successfully".to_owned())));
                    load();
                }
                Err(e) => {
                    log::error!("cancelling booking {id} failed: {e}");
                    action.set(Some(Notice::Error(e.user_message("Failed to cancel booking"))));
                }
            }
            cancelling.set(None);
        });
    };

    view! {
        <div class="bookings-page">
            <h1>"My Bookings"</h1>
            <div class="filter-bar">
                <select
                    class="form-input"
                    on:change=move |ev| {
                        status_filter.set(BookingStatus::parse(&event_target_value(&ev)));
                        load();
                    }
                >
                    <option value="">"All statuses"</option>
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{status_label(s)}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <NoticeLine notice=action/>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                <Show
                    when=move || !bookings.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="muted">
                                "You have no bookings yet. " <a href="/hotels">"Find a hotel"</a>
                            </p>
                        }
                    }
                >
                    <div class="booking-list">
                        {move || {
                            bookings
                                .get()
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id.clone();
                                    let busy_id = booking.id.clone();
                                    let hotel_href = format!("/hotels/{}", booking.hotel.id);
                                    let cancel_button = booking.status.is_cancellable().then(|| {
                                        view! {
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || cancelling.get().is_some()
                                                on:click=move |_| on_cancel(id.clone())
                                            >
                                                {move || {
                                                    if cancelling.get().as_deref() == Some(busy_id.as_str()) {
                                                        "Cancelling..."
                                                    } else {
                                                        "Cancel Booking"
                                                    }
                                                }}
                                            </button>
                                        }
                                    });
                                    view! {
                                        <article class="booking-card">
                                            <header class="booking-card__header">
                                                <a href=hotel_href>
                                                    <h3>{booking.hotel.name.clone()}</h3>
                                                </a>
                                                <span class=status_class(booking.status)>
                                                    {status_label(booking.status)}
                                                </span>
                                            </header>
                                            <p>
                                                <strong>"Booking ID: "</strong>
                                                {short_id(&booking.id)}
                                            </p>
                                            <p>
                                                <strong>"Check-in: "</strong>
                                                {display_date(&booking.check_in_date)}
                                            </p>
                                            <p>
                                                <strong>"Check-out: "</strong>
                                                {display_date(&booking.check_out_date)}
                                            </p>
                                            <p>
                                                <strong>"Total: "</strong>
                                                {rupiah(booking.total_price)}
                                            </p>
                                            <p class="muted">"Booked on " {display_date(&booking.created_at)}</p>
                                            {cancel_button}
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
