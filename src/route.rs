// src/route.rs

use crate::wizard::{current_step, WizardStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Auth,
    Dashboard,
    Profile,
    CreateWill(WizardStep),
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
            Route::CreateWill(step) => step.href(),
        }
    }

    /// `/` and `/create-will` land on their default pages; unknown paths are `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Dashboard),
            "/auth" => Some(Route::Auth),
            "/dashboard" => Some(Route::Dashboard),
            "/profile" => Some(Route::Profile),
            "/create-will" => Some(Route::CreateWill(WizardStep::Assets)),
            _ => current_step(path).map(Route::CreateWill),
        }
    }

    pub fn is_create_will(self) -> bool {
        matches!(self, Route::CreateWill(_))
    }
}

/// Minimal routing context derived once per frame
#[derive(Clone, Copy, Debug)]
pub struct RouteCtx {
    pub signed_in: bool,
    pub verified: bool,
}

/// Centralized route invariants (pure)
pub fn apply_route_guards(ctx: RouteCtx, requested: Route) -> Route {
    if !ctx.signed_in {
        return Route::Auth;
    }

    match requested {
        Route::Auth => Route::Dashboard,
        Route::CreateWill(_) if !ctx.verified => Route::Profile,
        other => other,
    }
}

/// Panel messages belong to the page that raised them.
pub fn clears_messages(prev: Route, next: Route) -> bool {
    match (prev, next) {
        // stepping inside the wizard keeps the seal notice visible
        (Route::CreateWill(_), Route::CreateWill(_)) => false,
        _ => prev != next,
    }
}

// ======================================================
// Unit Tests
// ======================================================
