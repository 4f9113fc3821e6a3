//! Account settings: shows which account is signed in.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.get().session.map(|s| s.email).unwrap_or_default();

    view! {
        <section class="settings">
            <h1>"Configuraciones"</h1>
            <p class="settings__account">"Cuenta: " {email}</p>
        </section>
    }
}
