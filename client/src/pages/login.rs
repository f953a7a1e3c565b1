//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful credential exchange hands the token to the session store;
//! the resulting auth change triggers the signed-in redirect, which returns
//! the user to the route remembered in `?from=` (or home).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::api::login;
use session::guard::post_login_path;
use session::types::LoginDto;

use crate::app::use_api;
use crate::components::auth_form::AuthForm;
use crate::state::auth::AuthState;
use crate::util::auth::{RETURN_TO_PARAM, install_signed_in_redirect};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();
    let query = use_query_map();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let return_to = move || post_login_path(query.get_untracked().get(RETURN_TO_PARAM).as_deref());
    install_signed_in_redirect(auth, return_to, use_navigate());

    let on_submit = Callback::new(move |dto: LoginDto| {
        busy.set(true);
        let client = api.client();
        spawn_local(async move {
            match login(&client, &dto).await {
                Ok(response) => {
                    if let Err(e) = client.session().login(&response.access_token, &response.user) {
                        log::error!("login response rejected: {e}");
                        error.set(Some("Login failed: the server returned an unusable session".to_owned()));
                    }
                }
                Err(e) => {
                    log::error!("login failed: {e}");
                    error.set(Some(e.user_message("Login failed. Please check your credentials")));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || auth.get().shows_auth_form()
                    fallback=move || auth.get().loading.then(|| view! { <div class="loader"></div> })
                >
                    <AuthForm busy=busy error=error on_submit=on_submit/>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
