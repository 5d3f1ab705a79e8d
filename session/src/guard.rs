//! Route table and pre-navigation access check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every front-end evaluates [`check`] before entering a view. The check is
//! stateless and reads the session only through [`SessionView`], so it is
//! re-run on every navigation attempt and after every login/logout.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::SessionView;

/// Views known to the navigation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Products,
    Categories,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Login, Self::Register, Self::Products, Self::Categories];

    /// Absolute path of this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::Products => "/products",
            Self::Categories => "/categories",
        }
    }

    /// Whether entering this route requires a session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Products | Self::Categories)
    }

    /// Exact lookup. Surrounding slashes, query strings and fragments are
    /// ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim().trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == path)
    }

    /// Route the navigation layer lands on for `path`: the matching route, or
    /// the login view for the root and any unknown path.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::parse(path).unwrap_or(Self::Login)
    }
}

/// Outcome of [`check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Proceed,
    Redirect(Route),
}

impl Access {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide whether navigation into `route` may proceed.
///
/// Public routes always proceed. Protected routes proceed only with a
/// session; otherwise the caller is sent to the login view.
#[must_use]
pub fn check<V>(route: Route, session: &V) -> Access
where
    V: SessionView + ?Sized,
{
    if !route.is_protected() || session.is_authenticated() {
        return Access::Proceed;
    }
    log::warn!("access to {} denied: sign in required", route.path());
    Access::Redirect(Route::Login)
}
