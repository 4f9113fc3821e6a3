//! Top bar showing who is signed in, with the logout action.

use leptos::prelude::*;

use crate::app::AppController;
use crate::state::auth::AuthState;

#[component]
pub fn SessionBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppController>();

    let identity = move || {
        auth.get()
            .session
            .map(|s| (s.full_name, s.role.to_string()))
            .unwrap_or_else(|| ("—".to_owned(), String::new()))
    };

    // The guard sees the cleared session and redirects to /login.
    let on_logout = move |_| controller.logout(&auth);

    view! {
        <header class="session-bar">
            <span class="session-bar__name">{move || identity().0}</span>
            <span class="session-bar__role">{move || identity().1}</span>
            <button class="btn session-bar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </header>
    }
}
