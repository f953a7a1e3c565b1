//! Hotel inventory management: list, create, edit, delete.

#[cfg(test)]
#[path = "hotels_test.rs"]
mod hotels_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::{delete_hotel, list_hotels};
use session::types::{Hotel, HotelQuery};

use crate::app::use_api;
use crate::components::hotel_form::HotelForm;
use crate::components::notice::{Notice, NoticeLine};
use crate::util::browser;
use crate::util::format::{rupiah, short_id};

/// Which form, if any, is open above the table.
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Creating,
    Editing(Hotel),
}

/// Replace the hotel with the same id, or append it. Returns `true` when an
/// existing entry was replaced.
fn upsert(hotels: &mut Vec<Hotel>, saved: Hotel) -> bool {
    match hotels.iter_mut().find(|h| h.id == saved.id) {
        Some(slot) => {
            *slot = saved;
            true
        }
        None => {
            hotels.push(saved);
            false
        }
    }
}

fn saved_message(name: &str, replaced: bool) -> String {
    if replaced {
        format!("Hotel \"{name}\" updated successfully!")
    } else {
        format!("Hotel \"{name}\" created successfully!")
    }
}

#[component]
pub fn ManageHotelsPage() -> impl IntoView {
    let api = use_api();

    let hotels = RwSignal::new(Vec::<Hotel>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let action = RwSignal::new(None::<Notice>);
    let editor = RwSignal::new(Editor::Closed);

    let client = api.client();
    spawn_local(async move {
        match list_hotels(&client, &HotelQuery::default()).await {
            Ok(list) => hotels.set(list),
            Err(e) => {
                log::error!("fetching hotels failed: {e}");
                error.set(Some(e.user_message("Failed to fetch hotels")));
            }
        }
        loading.set(false);
    });

    let on_saved = Callback::new(move |saved: Hotel| {
        let mut replaced = false;
        hotels.update(|list| replaced = upsert(list, saved.clone()));
        action.set(Some(Notice::Success(saved_message(&saved.name, replaced))));
        editor.set(Editor::Closed);
    });
    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));

    let on_delete = move |hotel: Hotel| {
        let prompt = format!("Are you sure you want to delete the hotel \"{}\"?", hotel.name);
        if !browser::confirm(&prompt) {
            return;
        }
        action.set(None);
        let client = api.client();
        spawn_local(async move {
            match delete_hotel(&client, &hotel.id).await {
                Ok(()) => {
                    hotels.update(|list| list.retain(|h| h.id != hotel.id));
                    if matches!(editor.get_untracked(), Editor::Editing(ref h) if h.id == hotel.id) {
                        editor.set(Editor::Closed);
                    }
                    action.set(Some(Notice::Success(format!(
                        "Hotel \"{}\" deleted successfully.",
                        hotel.name
                    ))));
                }
                Err(e) => {
                    log::error!("deleting hotel {} failed: {e}", hotel.id);
                    action.set(Some(Notice::Error(e.user_message("Failed to delete hotel"))));
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Manage Hotels"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        action.set(None);
                        editor.set(Editor::Creating);
                    }
                >
                    "Add New Hotel"
                </button>
            </header>
            <NoticeLine notice=action/>
            {move || match editor.get() {
                Editor::Closed => None,
                Editor::Creating => {
                    Some(view! { <HotelForm hotel=None on_saved=on_saved on_cancel=on_cancel/> }.into_any())
                }
                Editor::Editing(hotel) => {
                    Some(
                        view! { <HotelForm hotel=Some(hotel) on_saved=on_saved on_cancel=on_cancel/> }
                            .into_any(),
                    )
                }
            }}
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                <h2>{move || format!("All Hotels ({})", hotels.get().len())}</h2>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Location"</th>
                            <th>"Price/Night"</th>
                            <th>"Rooms"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            hotels
                                .get()
                                .into_iter()
                                .map(|hotel| {
                                    let to_edit = hotel.clone();
                                    let to_delete = hotel.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <abbr title=hotel.id.clone()>{short_id(&hotel.id)}</abbr>
                                            </td>
                                            <td>{hotel.name.clone()}</td>
                                            <td>{hotel.location.clone()}</td>
                                            <td>{rupiah(hotel.price_per_night)}</td>
                                            <td>{hotel.available_rooms}</td>
                                            <td class="admin-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        action.set(None);
                                                        editor.set(Editor::Editing(to_edit.clone()));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete(to_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
