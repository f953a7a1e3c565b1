//! Profile of the signed-in user.
//!
//! Shows the session identity immediately and fills in the account record
//! from `GET /users/me` once it arrives.

use leptos::prelude::*;
use leptos::task::spawn_local;
use session::api::my_profile;
use session::types::User;
use session::validation::display_date;

use crate::app::use_api;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();

    let record = RwSignal::new(None::<User>);
    let error = RwSignal::new(None::<String>);

    let client = api.client();
    spawn_local(async move {
        match my_profile(&client).await {
            Ok(user) => record.set(Some(user)),
            Err(e) => {
                log::error!("fetching profile failed: {e}");
                error.set(Some(e.user_message("Failed to load profile details")));
            }
        }
    });

    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>
            {move || {
                let Some(user) = auth.get().user else {
                    return view! { <p class="muted">"User data not available."</p> }.into_any();
                };
                let member_since = record
                    .get()
                    .and_then(|r| r.created_at)
                    .map_or_else(|| "N/A".to_owned(), |at| display_date(&at));
                view! {
                    <dl class="profile-card">
                        <dt>"Username"</dt>
                        <dd>{user.username}</dd>
                        <dt>"Role"</dt>
                        <dd class="profile-card__role">{user.role.to_string()}</dd>
                        <dt>"User ID"</dt>
                        <dd><code>{user.id}</code></dd>
                        <dt>"Member Since"</dt>
                        <dd>{member_since}</dd>
                    </dl>
                }
                    .into_any()
            }}
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
