//! Page routes and the auth-dependent navigation decisions made by the pages.

use crate::Identity;

const VENDOR_PREFIX: &str = "/vendor/";

/// A page of the marketplace front end
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Visitor landing page
    Home,
    /// Combined login / registration page
    Auth,
    /// Vendor dashboard
    Dashboard,
    /// Public storefront of one vendor
    VendorPublic { vendor_id: String },
    NotFound,
}

impl Route {
    /// Resolve a path. Anything unrecognised is `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/" | "" => Self::Home,
            "/auth" => Self::Auth,
            "/dashboard" => Self::Dashboard,
            other => match other.strip_prefix(VENDOR_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::VendorPublic {
                    vendor_id: id.to_string(),
                },
                _ => Self::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Auth => "/auth".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::VendorPublic { vendor_id } => format!("{VENDOR_PREFIX}{vendor_id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Where a successful login or registration lands
    pub fn after_sign_in(identity: &Identity) -> Self {
        if identity.is_vendor() {
            Self::Dashboard
        } else {
            Self::Home
        }
    }

    /// Target of the landing page's call to action.
    ///
    /// Signed-in vendors go to their dashboard; everyone else is sent to `/auth`.
    pub fn get_started(identity: Option<&Identity>) -> Self {
        match identity {
            Some(identity) if identity.is_vendor() => Self::Dashboard,
            _ => Self::Auth,
        }
    }

    /// Apply the route guard for the given identity.
    ///
    /// The dashboard is vendor-only: anonymous visitors are redirected to `/auth`,
    /// signed-in clients to `/`.
    pub fn guard(self, identity: Option<&Identity>) -> Self {
        match (self, identity) {
            (Self::Dashboard, None) => Self::Auth,
            (Self::Dashboard, Some(identity)) if !identity.is_vendor() => Self::Home,
            (route, _) => route,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
