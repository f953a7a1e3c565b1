//! Shown when a signed-in user lacks the role a route requires.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code status-page__code--danger">"403 - Unauthorized Access"</h1>
            <p>"You do not have the necessary permissions to view this page."</p>
            <a href="/" class="btn btn--primary">
                "Go to Homepage"
            </a>
        </div>
    }
}
