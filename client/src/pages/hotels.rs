//! Hotel listing with location, price, and availability filters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::list_hotels;
use session::types::{Hotel, HotelQuery};
use session::validation::hotel_query_from_filters;

use crate::app::use_api;
use crate::components::hotel_card::HotelCard;

#[component]
pub fn HotelsPage() -> impl IntoView {
    let api = use_api();

    let hotels = RwSignal::new(Vec::<Hotel>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let location = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let available = RwSignal::new(String::new());

    let load = move |query: HotelQuery| {
        loading.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            match list_hotels(&client, &query).await {
                Ok(list) => hotels.set(list),
                Err(e) => {
                    log::error!("fetching hotels failed: {e}");
                    error.set(Some(e.user_message("Failed to fetch hotels")));
                }
            }
            loading.set(false);
        });
    };
    load(HotelQuery::default());

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load(hotel_query_from_filters(
            &location.get_untracked(),
            &min_price.get_untracked(),
            &max_price.get_untracked(),
            &available.get_untracked(),
        ));
    };

    let on_reset = move |_| {
        for field in [location, min_price, max_price, available] {
            field.set(String::new());
        }
        load(HotelQuery::default());
    };

    view! {
        <div class="hotels-page">
            <h1>"Explore Hotels"</h1>
            <form class="filter-bar" on:submit=on_filter>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    placeholder="Min price"
                    prop:value=move || min_price.get()
                    on:input=move |ev| min_price.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    placeholder="Max price"
                    prop:value=move || max_price.get()
                    on:input=move |ev| max_price.set(event_target_value(&ev))
                />
                <select
                    class="form-input"
                    prop:value=move || available.get()
                    on:change=move |ev| available.set(event_target_value(&ev))
                >
                    <option value="">"Any availability"</option>
                    <option value="true">"Available"</option>
                    <option value="false">"Fully booked"</option>
                </select>
                <button class="btn btn--primary" type="submit">
                    "Apply Filters"
                </button>
                <button class="btn" type="button" on:click=on_reset>
                    "Reset"
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                <Show
                    when=move || !hotels.get().is_empty()
                    fallback=|| view! { <p class="muted">"No hotels match your filters."</p> }
                >
                    <div class="hotel-grid">
                        {move || {
                            hotels
                                .get()
                                .into_iter()
                                .map(|hotel| view! { <HotelCard hotel=hotel/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
