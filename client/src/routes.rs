//! Static route table: every path, the page it shows, and who may see it.
//!
//! DESIGN
//! ======
//! Role sets and paths are declared here and nowhere else. `app.rs` mounts a
//! single catch-all route that renders whatever `resolve` returns, and the
//! `Guarded` component looks the policy up by page, so changing a path or an
//! access policy is an edit to this file.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const STATUS_ROOT_PATH: &str = "/status";
pub const NOT_FOUND_PATH: &str = "/status/404";

/// Operational views: every signed-in role.
pub const STAFF: &[Role] = &[Role::Admin, Role::Attendant];
/// User-account management.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Roles(&'static [Role]),
}

/// Every view the router can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Profile,
    Licenses,
    Employees,
    Assignments,
    Settings,
    Users,
    Login,
    StatusNotFound,
    StatusServerError,
    StatusMaintenance,
    StatusComingSoon,
    NotFound,
}

impl Page {
    /// Heading shown in the dashboard chrome.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Profile => "Perfil",
            Self::Licenses => "Licencias",
            Self::Employees => "Empleados",
            Self::Assignments => "Asignaciones",
            Self::Settings => "Configuraciones",
            Self::Users => "Usuarios",
            Self::Login => "Login",
            Self::StatusNotFound | Self::NotFound => "Página no encontrada",
            Self::StatusServerError => "Error del servidor",
            Self::StatusMaintenance => "Mantenimiento",
            Self::StatusComingSoon => "Próximamente",
        }
    }

    /// Remote collection backing a record view, if any.
    #[must_use]
    pub fn resource(self) -> Option<&'static str> {
        match self {
            Self::Licenses => Some("licenses"),
            Self::Employees => Some("employees"),
            Self::Assignments => Some("assignments"),
            Self::Users => Some("users"),
            _ => None,
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub page: Page,
    pub access: Access,
}

const fn route(path: &'static str, page: Page, access: Access) -> RouteSpec {
    RouteSpec { path, page, access }
}

pub const ROUTES: &[RouteSpec] = &[
    route("/", Page::Home, Access::Roles(STAFF)),
    route("/perfil", Page::Profile, Access::Roles(STAFF)),
    route("/licencias", Page::Licenses, Access::Roles(STAFF)),
    route("/empleados", Page::Employees, Access::Roles(STAFF)),
    route("/asignaciones", Page::Assignments, Access::Roles(STAFF)),
    route("/configuraciones", Page::Settings, Access::Roles(STAFF)),
    route("/usuarios", Page::Users, Access::Roles(ADMIN_ONLY)),
    route(LOGIN_PATH, Page::Login, Access::Public),
    route(NOT_FOUND_PATH, Page::StatusNotFound, Access::Public),
    route("/status/500", Page::StatusServerError, Access::Public),
    route("/status/maintenance", Page::StatusMaintenance, Access::Public),
    route("/status/coming-soon", Page::StatusComingSoon, Access::Public),
];

/// Navigation entries shown in the sidebar, in display order.
pub const NAV_PAGES: &[Page] = &[
    Page::Home,
    Page::Licenses,
    Page::Employees,
    Page::Assignments,
    Page::Users,
    Page::Profile,
    Page::Settings,
];

/// Table row for `page`. The catch-all `NotFound` has no row.
#[must_use]
pub fn spec_for(page: Page) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|r| r.page == page)
}

/// Access policy for `page`; pages without a row are public.
#[must_use]
pub fn access_for(page: Page) -> Access {
    spec_for(page).map_or(Access::Public, |r| r.access)
}

/// Path for `page`, used by navigation links.
#[must_use]
pub fn path_for(page: Page) -> &'static str {
    spec_for(page).map_or(NOT_FOUND_PATH, |r| r.path)
}

/// Outcome of matching a path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    Page(Page, Access),
    /// `/status` on its own forwards to the not-found status page.
    Redirect(&'static str),
}

/// Match a request path. Trailing slashes are ignored; unknown paths resolve
/// to the public not-found page rather than failing.
#[must_use]
pub fn resolve(path: &str) -> Resolved {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { HOME_PATH } else { trimmed };
    if normalized == STATUS_ROOT_PATH {
        return Resolved::Redirect(NOT_FOUND_PATH);
    }
    ROUTES
        .iter()
        .find(|r| r.path == normalized)
        .map_or(Resolved::Page(Page::NotFound, Access::Public), |r| {
            Resolved::Page(r.page, r.access)
        })
}
