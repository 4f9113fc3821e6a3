//! Record views (licenses, employees, assignments, users).
//!
//! Each view loads its collection from the asset API with the session's
//! bearer token and reports how many records came back. Grid rendering and
//! CRUD forms live outside this crate.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::routes::Page;
use crate::state::auth::AuthState;

fn summary_text(loaded: Option<&Result<usize, String>>) -> String {
    match loaded {
        None => "Cargando…".to_owned(),
        Some(Ok(1)) => "1 registro".to_owned(),
        Some(Ok(count)) => format!("{count} registros"),
        Some(Err(e)) => format!("No se pudo cargar: {e}"),
    }
}

#[component]
pub fn RecordsPage(page: Page) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let loaded = RwSignal::new(None::<Result<usize, String>>);

    #[cfg(feature = "hydrate")]
    {
        if let (Some(resource), Some(session)) = (page.resource(), auth.get_untracked().session) {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_collection_len(&config, resource, &session).await;
                if let Err(e) = &result {
                    log::error!("loading {resource} failed: {e}");
                }
                loaded.set(Some(result));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, config);
    }

    view! {
        <section class="records">
            <h1>{page.title()}</h1>
            <p class="records__summary">{move || loaded.with(|l| summary_text(l.as_ref()))}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text_covers_each_state() {
        assert_eq!(summary_text(None), "Cargando…");
        assert_eq!(summary_text(Some(&Ok(1))), "1 registro");
        assert_eq!(summary_text(Some(&Ok(3))), "3 registros");
        assert_eq!(summary_text(Some(&Err("boom".to_owned()))), "No se pudo cargar: boom");
    }
}
