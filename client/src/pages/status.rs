//! Public status pages (404, 500, maintenance, coming soon).

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{HOME_PATH, Page};

#[component]
pub fn StatusPage(page: Page) -> impl IntoView {
    let detail = match page {
        Page::StatusServerError => "Ocurrió un error inesperado. Intenta de nuevo más tarde.",
        Page::StatusMaintenance => "Estamos realizando tareas de mantenimiento.",
        Page::StatusComingSoon => "Esta sección estará disponible pronto.",
        _ => "La página que buscas no existe.",
    };

    view! {
        <section class="status-page">
            <h1>{page.title()}</h1>
            <p>{detail}</p>
            <A href=HOME_PATH>"Volver al inicio"</A>
        </section>
    }
}
