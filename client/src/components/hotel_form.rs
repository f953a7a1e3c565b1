//! Admin create/edit form for a hotel.
//!
//! Editing pre-fills every field from the existing record; saving sends only
//! the validated body and hands the stored hotel back through `on_saved`.

#[cfg(test)]
#[path = "hotel_form_test.rs"]
mod hotel_form_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::{create_hotel, update_hotel};
use session::types::{Hotel, UpdateHotelDto};
use session::validation::{HotelFormInput, validate_hotel_form};

use crate::app::use_api;

fn initial_input(hotel: Option<&Hotel>) -> HotelFormInput {
    let Some(hotel) = hotel else {
        return HotelFormInput::default();
    };
    HotelFormInput {
        name: hotel.name.clone(),
        location: hotel.location.clone(),
        description: hotel.description.clone().unwrap_or_default(),
        price_per_night: hotel.price_per_night.to_string(),
        available_rooms: hotel.available_rooms.to_string(),
        image_url: hotel.image_url.clone().unwrap_or_default(),
    }
}

#[component]
pub fn HotelForm(hotel: Option<Hotel>, on_saved: Callback<Hotel>, on_cancel: Callback<()>) -> impl IntoView {
    let api = use_api();
    let initial = initial_input(hotel.as_ref());
    let editing_id = hotel.map(|h| h.id);
    let is_edit = editing_id.is_some();

    let name = RwSignal::new(initial.name);
    let location = RwSignal::new(initial.location);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(initial.price_per_night);
    let rooms = RwSignal::new(initial.available_rooms);
    let image_url = RwSignal::new(initial.image_url);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = HotelFormInput {
            name: name.get_untracked(),
            location: location.get_untracked(),
            description: description.get_untracked(),
            price_per_night: price.get_untracked(),
            available_rooms: rooms.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        let dto = match validate_hotel_form(&input) {
            Ok(dto) => dto,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let client = api.client();
        let editing_id = editing_id.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => update_hotel(&client, &id, &UpdateHotelDto::from(dto)).await,
                None => create_hotel(&client, &dto).await,
            };
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    log::error!("saving hotel failed: {e}");
                    error.set(Some(e.user_message("Failed to save hotel")));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="hotel-form" on:submit=on_submit>
            <h3>{if is_edit { "Edit Hotel" } else { "Add New Hotel" }}</h3>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="hotel-form__grid">
                <label class="form-field">
                    "Name"
                    <input
                        class="form-input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Location"
                    <input
                        class="form-input"
                        type="text"
                        required
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Price Per Night (Rp)"
                    <input
                        class="form-input"
                        type="number"
                        min="0"
                        step="any"
                        required
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Available Rooms"
                    <input
                        class="form-input"
                        type="number"
                        min="0"
                        step="1"
                        required
                        prop:value=move || rooms.get()
                        on:input=move |ev| rooms.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="form-field">
                "Description"
                <textarea
                    class="form-input"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="form-field">
                "Image URL"
                <input
                    class="form-input"
                    type="url"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
            </label>
            <div class="hotel-form__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || match (busy.get(), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Hotel",
                        (false, false) => "Create Hotel",
                    }}
                </button>
            </div>
        </form>
    }
}
