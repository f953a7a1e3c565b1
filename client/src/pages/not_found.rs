use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404 - Page Not Found"</h1>
            <p>"Sorry, the page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Go to Homepage"
            </a>
        </div>
    }
}
