//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use session::{Access, HttpClient, SessionStore, SystemClock};

use crate::components::{navbar::Navbar, protected::Protected};
use crate::config;
use crate::net::transport::BrowserTransport;
use crate::pages::admin::{bookings::ManageBookingsPage, hotels::ManageHotelsPage, users::ManageUsersPage};
use crate::pages::{
    home::HomePage, hotel_detail::HotelDetailPage, hotels::HotelsPage, login::LoginPage,
    my_bookings::MyBookingsPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
    unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::bind_session;
use crate::util::browser::BrowserNavigator;
use crate::util::storage::LocalStorageTokenStore;

/// The request pipeline as configured for the browser.
pub type ApiClient = HttpClient<BrowserTransport>;

/// Copyable context handle on the shared [`ApiClient`], so event handlers
/// inside reactive children can reach it without cloning captures.
#[derive(Clone, Copy)]
pub struct Api(StoredValue<ApiClient>);

impl Api {
    pub fn client(&self) -> ApiClient {
        self.0.get_value()
    }

    pub fn session(&self) -> SessionStore {
        self.0.with_value(|client| client.session().clone())
    }
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

/// Root application component.
///
/// Builds the session and request pipeline, provides them as context, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(
        Arc::new(LocalStorageTokenStore::new(config::token_key())),
        Arc::new(SystemClock),
    );
    let client = HttpClient::new(
        session.clone(),
        BrowserTransport::new(config::api_base_url()),
        Arc::new(BrowserNavigator),
    );
    let auth = RwSignal::new(AuthState::default());

    provide_context(auth);
    provide_context(Api(StoredValue::new(client)));
    bind_session(&session, auth);

    view! {
        <Title text="HotelBooking"/>

        <Router>
            <Navbar/>
            <main class="app-main container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("hotels") view=HotelsPage/>
                    <Route path=(StaticSegment("hotels"), ParamSegment("id")) view=HotelDetailPage/>
                    <Route
                        path=StaticSegment("my-bookings")
                        view=|| view! { <Protected access=Access::Authenticated><MyBookingsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Protected access=Access::Authenticated><ProfilePage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("manage-hotels"))
                        view=|| view! { <Protected access=Access::admin()><ManageHotelsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("manage-users"))
                        view=|| view! { <Protected access=Access::admin()><ManageUsersPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("manage-bookings"))
                        view=|| view! { <Protected access=Access::admin()><ManageBookingsPage/></Protected> }
                    />
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}
