//! Route wrapper that applies the session guard to its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates on every auth change and every navigation. While the session
//! is still loading nothing is decided; a neutral placeholder renders and no
//! redirect happens.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::guard::evaluate;
use session::{Access, GuardDecision};

use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

#[component]
pub fn Protected(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let decision = Memo::new(move |_| {
        let state = auth.get();
        evaluate(state.session_state(), state.user.as_ref(), &access, &pathname.get())
    });
    install_route_guard(decision, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="page-status">
                        <p>
                            {move || {
                                if decision.get() == GuardDecision::Pending { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
