// SPDX-License-Identifier: MPL-2.0
//! Screens and the routes that select them.

use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    Login,
    Register,
    #[default]
    Dashboard,
}

impl Screen {
    /// Maps a route path to its screen.
    ///
    /// Leading and trailing slashes, the query string and the fragment are
    /// ignored. Unknown and empty paths redirect to the dashboard.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('/');

        match path.to_ascii_lowercase().as_str() {
            "login" => Screen::Login,
            "register" => Screen::Register,
            "dashboard" => Screen::Dashboard,
            other => {
                if !other.is_empty() {
                    tracing::debug!(route = other, "unknown route, redirecting to dashboard");
                }
                Screen::Dashboard
            }
        }
    }

    /// Canonical path of this screen.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Screen::Login => "/login",
            Screen::Register => "/register",
            Screen::Dashboard => "/dashboard",
        }
    }

    /// i18n key of the screen name shown in the window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Login => "login-title",
            Screen::Register => "register-title",
            Screen::Dashboard => "dashboard-title",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_resolve() {
        assert_eq!(Screen::resolve("login"), Screen::Login);
        assert_eq!(Screen::resolve("/register"), Screen::Register);
        assert_eq!(Screen::resolve("/dashboard/"), Screen::Dashboard);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Screen::resolve("/login?next=/dashboard"), Screen::Login);
        assert_eq!(Screen::resolve("register#top"), Screen::Register);
    }

    #[test]
    fn unknown_and_empty_routes_redirect_to_dashboard() {
        assert_eq!(Screen::resolve(""), Screen::Dashboard);
        assert_eq!(Screen::resolve("/"), Screen::Dashboard);
        assert_eq!(Screen::resolve("/settings"), Screen::Dashboard);
    }

    #[test]
    fn paths_resolve_back_to_their_screen() {
        for screen in [Screen::Login, Screen::Register, Screen::Dashboard] {
            assert_eq!(Screen::resolve(screen.path()), screen);
            assert_eq!(screen.to_string(), screen.path());
        }
    }
}
