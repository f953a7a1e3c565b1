//! Username/password form shared by the login and register pages.
//!
//! Input is validated locally; only a well-formed `LoginDto` reaches
//! `on_submit`. The page owns the request and reports failures through
//! `error`.

use leptos::prelude::*;
use session::types::LoginDto;
use session::validation::validate_credentials;

#[component]
pub fn AuthForm(
    #[prop(optional)] register: bool,
    #[prop(into)] busy: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<LoginDto>,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let confirmation = register.then(|| confirm.get_untracked());
        match validate_credentials(&username.get_untracked(), &password.get_untracked(), confirmation.as_deref()) {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let title = if register { "Register" } else { "Login" };
    let password_autocomplete = if register { "new-password" } else { "current-password" };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2 class="auth-form__title">{title}</h2>
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <label class="form-field">
                "Username"
                <input
                    class="form-input"
                    type="text"
                    autocomplete="username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                "Password"
                <input
                    class="form-input"
                    type="password"
                    autocomplete=password_autocomplete
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || register>
                <label class="form-field">
                    "Confirm Password"
                    <input
                        class="form-input"
                        type="password"
                        autocomplete="new-password"
                        required
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || match (busy.get(), register) {
                    (true, _) => "Please wait...",
                    (false, true) => "Register",
                    (false, false) => "Login",
                }}
            </button>
        </form>
    }
}
