//! Registration page. Success shows a confirmation and moves on to login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::api::register;
use session::guard::{HOME_PATH, LOGIN_PATH};
use session::types::RegisterDto;

use crate::app::use_api;
use crate::components::auth_form::AuthForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;

#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();
    let navigate = use_navigate();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let registered = RwSignal::new(false);

    install_signed_in_redirect(auth, || HOME_PATH.to_owned(), navigate.clone());
    Effect::new(move || {
        if registered.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |dto: RegisterDto| {
        busy.set(true);
        success.set(None);
        let client = api.client();
        spawn_local(async move {
            match register(&client, &dto).await {
                Ok(user) => {
                    log::info!("registered {}", user.username);
                    success.set(Some("Registration successful! Redirecting to login...".to_owned()));
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    registered.set(true);
                }
                Err(e) => {
                    log::error!("registration failed: {e}");
                    error.set(Some(e.user_message("Registration failed. Please try again")));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show when=move || success.get().is_some()>
                    <p class="success-message">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || auth.get().shows_auth_form()
                    fallback=move || auth.get().loading.then(|| view! { <div class="loader"></div> })
                >
                    <AuthForm register=true busy=busy error=error on_submit=on_submit/>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
