//! Route table and resolution through the session guard.
//!
//! The table itself is static data; the only decision logic is the guard's.

use crate::state::ShellState;

use request_core::navigation::Navigator;

use log::debug;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const PROFILE: &str = "/profile";

pub struct Route {
    pub path: &'static str,
    pub title: &'static str,
    pub protected: bool,
}

pub const ROUTES: &[Route] = &[
    Route { path: HOME, title: "Home", protected: false },
    Route { path: LOGIN, title: "Login", protected: false },
    Route { path: REGISTER, title: "Register", protected: false },
    Route { path: DASHBOARD, title: "Dashboard", protected: true },
    Route { path: PROFILE, title: "Profile", protected: true },
];

/// What one navigation attempt produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The page rendered; carries its title.
    Rendered(&'static str),
    /// Guarded content with no session - the user is at login now.
    RedirectedToLogin,
    NotFound,
}

/// Navigate to `path`, letting the guard decide on protected routes.
///
/// The guard is evaluated fresh on every attempt; protected page titles
/// are only produced inside `render`, so a logged-out navigation never
/// touches them.
pub fn resolve(state: &ShellState, path: &str) -> Resolution {
    let Some(route) = ROUTES.iter().find(|route| route.path == path) else {
        debug!("No route for {path}");
        return Resolution::NotFound;
    };

    if !route.protected {
        state.navigator().redirect_to(route.path);
        return Resolution::Rendered(route.title);
    }

    match state.guard().render(|| route.title) {
        Some(title) => {
            state.navigator().redirect_to(route.path);
            Resolution::Rendered(title)
        }
        None => Resolution::RedirectedToLogin,
    }
}
