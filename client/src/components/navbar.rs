//! Top navigation bar.
//!
//! DESIGN
//! ======
//! Links follow the session: guests see login/register, signed-in users see
//! their bookings and profile, and admins additionally get the management
//! views. Logout ends the session locally and returns to the login view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::guard::LOGIN_PATH;

use crate::app::use_api;
use crate::state::auth::AuthState;

/// Navigation link that highlights itself on the current route.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <li>
            <a class="nav-link" class:nav-link--active=move || pathname.get() == href href=href>
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();
    let navigate = use_navigate();

    let on_logout = move |_| {
        api.session().logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner container">
                <a href="/" class="navbar__brand">
                    "HotelBooking"
                </a>
                <ul class="navbar__links">
                    <NavLink href="/hotels" label="Hotels"/>
                    {move || {
                        let state = auth.get();
                        if state.loading {
                            return ().into_any();
                        }
                        let Some(username) = state.username().map(str::to_owned) else {
                            return view! {
                                <NavLink href="/login" label="Login"/>
                                <NavLink href="/register" label="Register"/>
                            }
                                .into_any();
                        };
                        let on_logout = on_logout.clone();
                        view! {
                            <NavLink href="/my-bookings" label="My Bookings"/>
                            <NavLink href="/profile" label="Profile"/>
                            <Show when=move || auth.get().is_admin()>
                                <NavLink href="/admin/manage-hotels" label="Manage Hotels"/>
                                <NavLink href="/admin/manage-users" label="Manage Users"/>
                                <NavLink href="/admin/manage-bookings" label="Manage Bookings"/>
                            </Show>
                            <li class="navbar__user">"Hi, " {username}</li>
                            <li>
                                <button class="btn navbar__logout" on:click=on_logout>
                                    "Logout"
                                </button>
                            </li>
                        }
                            .into_any()
                    }}
                </ul>
            </div>
        </nav>
    }
}
