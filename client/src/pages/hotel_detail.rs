//! Hotel detail page with the booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Guests see the hotel and a prompt to log in; signed-in users
//! get the booking form.

#[cfg(test)]
#[path = "hotel_detail_test.rs"]
mod hotel_detail_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use session::ApiError;
use session::api::get_hotel;
use session::types::Hotel;

use crate::app::use_api;
use crate::components::booking_form::BookingForm;
use crate::state::auth::AuthState;
use crate::util::auth::login_url;
use crate::util::format::rupiah;

const NO_DESCRIPTION: &str = "No detailed description available for this hotel.";

fn load_error_message(id: &str, err: &ApiError) -> String {
    if err.status() == Some(404) {
        format!("Hotel with ID \"{id}\" not found")
    } else {
        err.user_message("Failed to fetch hotel details")
    }
}

#[component]
pub fn HotelDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();
    let params = use_params_map();

    let hotel = RwSignal::new(None::<Hotel>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.get().get("id") else {
            error.set(Some("Hotel ID is missing from the URL".to_owned()));
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            match get_hotel(&client, &id).await {
                Ok(found) => hotel.set(Some(found)),
                Err(e) => {
                    log::error!("fetching hotel {id} failed: {e}");
                    hotel.set(None);
                    error.set(Some(load_error_message(&id, &e)));
                }
            }
            loading.set(false);
        });
    });

    let login_href = move || {
        let id = params.get().get("id").unwrap_or_default();
        login_url(&format!("/hotels/{id}"))
    };

    view! {
        <div class="hotel-detail-page">
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                {move || match hotel.get() {
                    None => {
                        view! {
                            <p class="error-message">
                                {error.get().unwrap_or_else(|| "Hotel not found".to_owned())} " "
                                <a href="/hotels">"Go back to hotels"</a>
                            </p>
                        }
                            .into_any()
                    }
                    Some(h) => {
                        let image = h.image_url.clone().map(|src| {
                            let alt = h.name.clone();
                            view! { <img class="hotel-detail__image" src=src alt=alt/> }
                        });
                        let rooms = if h.available_rooms > 0 {
                            h.available_rooms.to_string()
                        } else {
                            "Sold Out".to_owned()
                        };
                        let description = h.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_owned());
                        let booking_hotel = h.clone();
                        view! {
                            <article class="hotel-detail">
                                {image}
                                <div class="hotel-detail__info">
                                    <h1>{h.name}</h1>
                                    <p class="hotel-detail__location">{h.location}</p>
                                    <p class="hotel-detail__description">{description}</p>
                                    <p>
                                        <strong>"Price per night: "</strong>
                                        {rupiah(h.price_per_night)}
                                    </p>
                                    <p>
                                        <strong>"Available rooms: "</strong>
                                        {rooms}
                                    </p>
                                </div>
                                <aside class="hotel-detail__booking">
                                    <Show
                                        when=move || auth.get().is_authenticated()
                                        fallback=move || {
                                            view! {
                                                <p>
                                                    <a href=login_href>"Log in"</a>
                                                    " to book this hotel."
                                                </p>
                                            }
                                        }
                                    >
                                        <BookingForm hotel=booking_hotel.clone()/>
                                    </Show>
                                </aside>
                            </article>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
