//! Read-only view of the signed-in account.

use leptos::prelude::*;

use crate::net::types::Session;
use crate::state::auth::AuthState;

fn field_text(session: Option<&Session>, pick: fn(&Session) -> String) -> String {
    session.map_or_else(|| "—".to_owned(), pick)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = move || auth.get().session;
    let image_url = move || session().and_then(|s| s.image).map(|i| i.url);

    view! {
        <section class="profile">
            <h1>"Perfil"</h1>
            <Show when=move || image_url().is_some()>
                <img class="profile__avatar" alt="Foto de perfil" src=move || image_url().unwrap_or_default()/>
            </Show>
            <dl class="profile__fields">
                <dt>"Nombre"</dt>
                <dd>{move || field_text(session().as_ref(), |s| s.full_name.clone())}</dd>
                <dt>"Correo"</dt>
                <dd>{move || field_text(session().as_ref(), |s| s.email.clone())}</dd>
                <dt>"Rol"</dt>
                <dd>{move || field_text(session().as_ref(), |s| s.role.to_string())}</dd>
                <dt>"Estado"</dt>
                <dd>
                    {move || field_text(session().as_ref(), |s| if s.state { "Activo" } else { "Inactivo" }.to_owned())}
                </dd>
            </dl>
        </section>
    }
}
