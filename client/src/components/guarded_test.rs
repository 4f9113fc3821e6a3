use std::sync::Arc;

use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::routes::LOGIN_PATH;

fn render(decision: GuardDecision) -> String {
    Owner::new().with(|| {
        let children: ChildrenFn = Arc::new(|| view! { <p class="protected">"inventory"</p> }.into_any());
        guarded_content(RwSignal::new(decision).into(), children).to_html()
    })
}

#[test]
fn granted_view_renders_children() {
    let html = render(GuardDecision::Render);
    assert!(html.contains("inventory"), "{html}");
    assert!(!html.contains("guard-pending"), "{html}");
}

#[test]
fn denied_view_never_emits_children() {
    let html = render(GuardDecision::Redirect(LOGIN_PATH));
    assert!(!html.contains("inventory"), "{html}");
    assert!(html.contains("guard-pending"), "{html}");
}

#[test]
fn pending_view_matches_denied_view() {
    assert_eq!(render(GuardDecision::Pending), render(GuardDecision::Redirect(LOGIN_PATH)));
}
