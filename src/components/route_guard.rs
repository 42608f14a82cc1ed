//! Access-control checkpoint wrapping a routed subtree.
//!
//! The decision is a pure function of the current session and the
//! configured allow-list, re-evaluated on every render; nothing is
//! retained between evaluations. Redirects go through the router rather
//! than a hard location assignment.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::role::{LANDING_ROUTE, Role};
use crate::state::session::SessionState;

/// What the guard does with the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session is authenticated and authorized for this subtree.
    Render,
    /// Leave: either unauthenticated (to the landing route) or
    /// authenticated for a different role (to that role's own dashboard).
    Redirect(&'static str),
}

/// Evaluate the guard for a session and an optional role allow-list.
///
/// No user redirects to the landing route regardless of the allow-list.
/// A user whose role is not listed redirects to the route mapped from
/// their *actual* role, never to the guarded route.
pub fn evaluate(user: Option<&User>, allowed: Option<&[Role]>) -> GuardOutcome {
    let Some(user) = user else {
        return GuardOutcome::Redirect(LANDING_ROUTE);
    };
    match allowed {
        Some(roles) if !roles.contains(&user.role) => {
            GuardOutcome::Redirect(user.role.dashboard_route())
        }
        _ => GuardOutcome::Render,
    }
}

/// Gate a routed subtree on the session, optionally restricted to a set
/// of roles. Renders nothing while redirecting.
#[component]
pub fn RouteGuard(
    #[prop(optional, into)] allowed: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let allowed = StoredValue::new(allowed);

    // Navigation is a side effect; the render closure below only decides
    // whether the subtree is visible.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        let outcome = allowed.with_value(|a| evaluate(state.user.as_ref(), a.as_deref()));
        if let GuardOutcome::Redirect(route) = outcome {
            navigate(route, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            let state = session.get();
            let outcome = allowed.with_value(|a| evaluate(state.user.as_ref(), a.as_deref()));
            match outcome {
                GuardOutcome::Render => children().into_any(),
                GuardOutcome::Redirect(_) => ().into_any(),
            }
        }}
    }
}
