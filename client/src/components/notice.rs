//! One-line outcome banner for page actions.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[component]
pub fn NoticeLine(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| match n {
            Notice::Success(text) => view! { <p class="success-message">{text}</p> }.into_any(),
            Notice::Error(text) => view! { <p class="error-message">{text}</p> }.into_any(),
        })
    }
}
