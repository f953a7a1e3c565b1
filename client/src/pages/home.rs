//! Landing page with a hero banner and a few available hotels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::list_hotels;
use session::types::{Hotel, HotelQuery};

use crate::app::use_api;
use crate::components::hotel_card::HotelCard;
use crate::state::auth::AuthState;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();

    let featured = RwSignal::new(Vec::<Hotel>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let client = api.client();
    spawn_local(async move {
        let query = HotelQuery { available: Some(true), ..HotelQuery::default() };
        match list_hotels(&client, &query).await {
            Ok(mut hotels) => {
                hotels.truncate(FEATURED_COUNT);
                featured.set(hotels);
            }
            Err(e) => {
                log::error!("fetching featured hotels failed: {e}");
                error.set(Some(e.user_message("Failed to load featured hotels")));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Find Your Perfect Stay"</h1>
                <p class="hero__subtitle">
                    "Discover amazing hotels and book your next adventure with unmatched ease."
                </p>
                <div class="hero__actions">
                    <a href="/hotels" class="btn btn--primary btn--large">
                        "Explore Hotels"
                    </a>
                    <Show when=move || !auth.get().loading && !auth.get().is_authenticated()>
                        <a href="/register" class="btn btn--secondary btn--large">
                            "Sign Up Now"
                        </a>
                    </Show>
                </div>
                <Show when=move || auth.get().is_authenticated()>
                    <p class="hero__welcome">
                        "Welcome back, " {move || auth.get().username().unwrap_or_default().to_owned()} "!"
                    </p>
                </Show>
            </header>

            <section class="featured">
                <h2>"Featured Hotels"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <div class="loader"></div> }>
                    <div class="hotel-grid">
                        {move || {
                            featured
                                .get()
                                .into_iter()
                                .map(|hotel| view! { <HotelCard hotel=hotel/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || featured.get().is_empty() && error.get().is_none()>
                        <p class="muted">"No hotels are available right now."</p>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
