//! Card summarizing one hotel in the listing grid.

use leptos::prelude::*;
use session::types::Hotel;

use crate::util::format::{availability_label, rupiah};

#[component]
pub fn HotelCard(hotel: Hotel) -> impl IntoView {
    let href = format!("/hotels/{}", hotel.id);
    let sold_out = hotel.available_rooms <= 0;
    let image = hotel.image_url.clone().map(|src| {
        let alt = hotel.name.clone();
        view! { <img class="hotel-card__image" src=src alt=alt/> }
    });

    view! {
        <article class="hotel-card">
            {image}
            <div class="hotel-card__body">
                <h3 class="hotel-card__name">{hotel.name}</h3>
                <p class="hotel-card__location">{hotel.location}</p>
                <p class="hotel-card__price">
                    <strong>{rupiah(hotel.price_per_night)}</strong>
                    " / night"
                </p>
                <p class="hotel-card__rooms" class:hotel-card__rooms--none=sold_out>
                    {availability_label(hotel.available_rooms)}
                </p>
                <a class="btn btn--primary" href=href>
                    "View Details"
                </a>
            </div>
        </article>
    }
}
