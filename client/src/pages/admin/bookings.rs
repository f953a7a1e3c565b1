//! Every booking in the system, filterable by user, hotel and status, with
//! an inline status override per row.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::{all_bookings, update_booking_status};
use session::types::{Booking, BookingQuery, BookingStatus};
use session::validation::display_date;

use crate::app::use_api;
use crate::components::notice::{Notice, NoticeLine};
use crate::util::format::{newest_first, rupiah, short_id, status_class, status_label, truncate};

const HOTEL_NAME_WIDTH: usize = 25;

fn booking_filter(user_id: &str, hotel_id: &str, status: &str) -> BookingQuery {
    let id = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_owned())
    };
    BookingQuery {
        user_id: id(user_id),
        hotel_id: id(hotel_id),
        status: BookingStatus::parse(status),
    }
}

/// Apply a status change to the local list without refetching.
fn apply_status(bookings: &mut [Booking], updated: &Booking) {
    if let Some(slot) = bookings.iter_mut().find(|b| b.id == updated.id) {
        slot.status = updated.status;
        slot.updated_at.clone_from(&updated.updated_at);
    }
}

#[component]
pub fn ManageBookingsPage() -> impl IntoView {
    let api = use_api();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let action = RwSignal::new(None::<Notice>);
    let updating = RwSignal::new(None::<String>);
    let user_filter = RwSignal::new(String::new());
    let hotel_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let load = move || {
        loading.set(true);
        error.set(None);
        let query = booking_filter(
            &user_filter.get_untracked(),
            &hotel_filter.get_untracked(),
            &status_filter.get_untracked(),
        );
        let client = api.client();
        spawn_local(async move {
            match all_bookings(&client, &query).await {
                Ok(mut list) => {
                    newest_first(&mut list);
                    bookings.set(list);
                }
                Err(e) => {
                    log::error!("fetching all bookings failed: {e}");
                    error.set(Some(e.user_message("Failed to fetch bookings")));
                }
            }
            loading.set(false);
        });
    };
    load();

    let on_status = move |id: String, status: BookingStatus| {
        if updating.get_untracked().is_some() {
            return;
        }
        action.set(None);
        updating.set(Some(id.clone()));
        let client = api.client();
        spawn_local(async move {
            match update_booking_status(&client, &id, status).await {
                Ok(updated) => {
                    bookings.update(|list| apply_status(list, &updated));
                    action.set(Some(Notice::Success(format!(
                        "Booking {} status updated to {}.",
                        short_id(&id),
                        status
                    ))));
                }
                Err(e) => {
                    log::error!("updating booking {id} to {status} failed: {e}");
                    let fallback = format!("Failed to update status for booking {}", short_id(&id));
                    action.set(Some(Notice::Error(e.user_message(&fallback))));
                }
            }
            updating.set(None);
        });
    };

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };
    let on_clear = move |_| {
        user_filter.set(String::new());
        hotel_filter.set(String::new());
        status_filter.set(String::new());
        load();
    };

    view! {
        <div class="admin-page">
            <h1>"Manage Bookings"</h1>
            <NoticeLine notice=action/>
            <form class="filter-bar" on:submit=on_filter>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Filter by User UUID"
                    prop:value=move || user_filter.get()
                    on:input=move |ev| user_filter.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Filter by Hotel UUID"
                    prop:value=move || hotel_filter.get()
                    on:input=move |ev| hotel_filter.set(event_target_value(&ev))
                />
                <select
                    class="form-input"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{status_label(s)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" type="submit">"Apply Filters"</button>
                <button class="btn" type="button" on:click=on_clear>"Clear Filters"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="error-message">
                    "Error fetching data: " {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                <h2>{move || format!("All Bookings ({})", bookings.get().len())}</h2>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Hotel"</th>
                            <th>"User"</th>
                            <th>"Check-in"</th>
                            <th>"Check-out"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Change Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = bookings.get();
                            if list.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="8" class="muted">
                                            "No bookings found matching your criteria."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            list.into_iter()
                                .map(|booking| {
                                    let id = booking.id.clone();
                                    let busy_id = booking.id.clone();
                                    let current = booking.status;
                                    let who = booking
                                        .user
                                        .as_ref()
                                        .map_or_else(|| short_id(&booking.user_id), |u| u.username.clone());
                                    view! {
                                        <tr>
                                            <td>
                                                <abbr title=booking.id.clone()>{short_id(&booking.id)}</abbr>
                                            </td>
                                            <td title=booking.hotel.name.clone()>
                                                {truncate(&booking.hotel.name, HOTEL_NAME_WIDTH)}
                                            </td>
                                            <td>
                                                <abbr title=booking.user_id.clone()>{who}</abbr>
                                            </td>
                                            <td>{display_date(&booking.check_in_date)}</td>
                                            <td>{display_date(&booking.check_out_date)}</td>
                                            <td>{rupiah(booking.total_price)}</td>
                                            <td>
                                                <span class=status_class(current)>{status_label(current)}</span>
                                            </td>
                                            <td>
                                                <select
                                                    class="form-input"
                                                    disabled=move || {
                                                        updating.get().as_deref() == Some(busy_id.as_str())
                                                    }
                                                    on:change=move |ev| {
                                                        if let Some(next) = BookingStatus::parse(
                                                            &event_target_value(&ev),
                                                        ) {
                                                            if next != current {
                                                                on_status(id.clone(), next);
                                                            }
                                                        }
                                                    }
                                                >
                                                    {BookingStatus::ALL
                                                        .into_iter()
                                                        .map(|s| {
                                                            view! {
                                                                <option value=s.as_str() selected=s == current>
                                                                    {status_label(s)}
                                                                </option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
