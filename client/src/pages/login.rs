//! Login page: email + password credential sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public entry into the dashboard. Submitting dispatches one login
//! through the session controller; once a session exists the page forwards
//! to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::config::ApiConfig;
use crate::net::types::Credentials;
use crate::routes::HOME_PATH;
use crate::state::auth::AuthState;

const EMAIL_REQUIRED: &str = "Se requiere el campo dirección de correo electrónico";
const PASSWORD_REQUIRED: &str = "Se requiere el campo contraseña";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppController>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if auth.with(|state| state.session.is_some()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.loading) {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                hint.set(Some(message));
                return;
            }
        };
        hint.set(None);

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            let gateway = crate::net::api::AuthGateway::new(config.clone(), crate::net::transport::BrowserTransport);
            leptos::task::spawn_local(async move {
                controller.login(&gateway, &auth, &credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&controller, &config, credentials);
        }
    };

    let busy = move || auth.with(|state| state.loading);
    let message = move || hint.get().map(str::to_owned).or_else(|| auth.with(|state| state.error.clone()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AssetDesk"</h1>
                <p class="login-card__subtitle">"Iniciar sesión"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Ingresando..." } else { "Iniciar Sesión" }}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message">{move || message().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
