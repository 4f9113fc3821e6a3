//! Dashboard chrome: sidebar navigation, session bar, and the active page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::session_bar::SessionBar;
use crate::pages::{home::HomePage, profile::ProfilePage, records::RecordsPage, settings::SettingsPage, status::StatusPage};
use crate::routes::{Access, NAV_PAGES, Page, access_for, path_for};
use crate::state::auth::AuthState;
use crate::util::auth::can_access;

/// Sidebar layout wrapping the content for `page`.
///
/// Navigation only lists pages the current session may open.
#[component]
pub fn SidebarLayout(page: Page) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let visible_pages = move || {
        let state = auth.get();
        NAV_PAGES
            .iter()
            .copied()
            .filter(|p| match access_for(*p) {
                Access::Public => true,
                Access::Roles(roles) => can_access(state.session.as_ref(), roles),
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="layout">
            <nav class="layout__sidebar">
                <div class="layout__brand">"AssetDesk"</div>
                <ul class="layout__nav">
                    <For each=visible_pages key=|p| *p let:nav_page>
                        <li class=move || nav_class(nav_page == page)>
                            <A href=path_for(nav_page)>{nav_page.title()}</A>
                        </li>
                    </For>
                </ul>
            </nav>
            <div class="layout__main">
                <SessionBar/>
                <main class="layout__content">{page_content(page)}</main>
            </div>
        </div>
    }
}

fn nav_class(active: bool) -> &'static str {
    if active { "layout__nav-item layout__nav-item--active" } else { "layout__nav-item" }
}

fn page_content(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::Settings => view! { <SettingsPage/> }.into_any(),
        Page::Licenses | Page::Employees | Page::Assignments | Page::Users => {
            view! { <RecordsPage page=page/> }.into_any()
        }
        _ => view! { <StatusPage page=Page::NotFound/> }.into_any(),
    }
}
