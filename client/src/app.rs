//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::guarded::Guarded;
use crate::components::sidebar_layout::SidebarLayout;
use crate::config::ApiConfig;
use crate::pages::{login::LoginPage, status::StatusPage};
use crate::routes::{Access, Page, Resolved, resolve};
use crate::state::auth::AuthState;
use crate::state::session_controller::SessionController;
use crate::util::session_store::{BrowserStorage, CredentialStore};

/// Session controller type shared through context.
pub type AppController = SessionController<BrowserStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session once, provides the auth state, session
/// controller, and API config to every page, and mounts the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller: AppController = SessionController::new(CredentialStore::new(BrowserStorage));
    let auth = RwSignal::new(AuthState::restoring());

    // Effects only run in the browser, after hydration.
    Effect::new({
        let controller = controller.clone();
        move || {
            controller.restore(&auth);
        }
    });

    provide_context::<RwSignal<AuthState>>(auth);
    provide_context(controller);
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/assetdesk.css"/>
        <Title text="AssetDesk"/>

        <Router>
            <Routes fallback=|| view! { <StatusPage page=Page::NotFound/> }>
                <Route path=StaticSegment("") view=RoutedPage/>
                <Route path=WildcardSegment("any") view=RoutedPage/>
            </Routes>
        </Router>
    }
}

/// Whatever the route table says the current path shows.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let resolved = Memo::new(move |_| resolve(&location.pathname.get()));

    Effect::new(move || {
        if let Resolved::Redirect(to) = resolved.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match resolved.get() {
        Resolved::Page(page, access) => page_view(page, access),
        Resolved::Redirect(_) => view! { <div class="guard-pending" aria-busy="true"></div> }.into_any(),
    }
}

fn page_view(page: Page, access: Access) -> AnyView {
    match (page, access) {
        (Page::Login, _) => view! { <LoginPage/> }.into_any(),
        (_, Access::Roles(_)) => view! {
            <Guarded page=page>
                <SidebarLayout page=page/>
            </Guarded>
        }
        .into_any(),
        (_, Access::Public) => view! { <StatusPage page=page/> }.into_any(),
    }
}
