//! Landing page for signed-in staff.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{Page, path_for};
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .session
            .map_or_else(|| "Bienvenido".to_owned(), |s| format!("Bienvenido, {}", s.full_name))
    };

    view! {
        <section class="home">
            <h1>{greeting}</h1>
            <div class="home__shortcuts">
                <A href=path_for(Page::Licenses)>{Page::Licenses.title()}</A>
                <A href=path_for(Page::Employees)>{Page::Employees.title()}</A>
                <A href=path_for(Page::Assignments)>{Page::Assignments.title()}</A>
            </div>
        </section>
    }
}
