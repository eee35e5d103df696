//! Identity resolution and the per-request context handed to handlers.

use crate::todo::domain::UserId;
use axum::http::{HeaderMap, HeaderName};
use uuid::Uuid;

/// Resolves the authenticated user behind a request.
///
/// Identity management lives outside this application; implementations only
/// translate whatever the upstream authenticator attached to the request.
pub trait IdentityProvider: Send + Sync {
    /// Returns the authenticated user, or `None` for anonymous requests.
    fn resolve(&self, headers: &HeaderMap) -> Option<UserId>;
}

/// Trusts a header set by an authenticating reverse proxy.
#[derive(Debug, Clone)]
pub struct TrustedHeaderIdentityProvider {
    header: HeaderName,
}

impl TrustedHeaderIdentityProvider {
    /// Creates a provider reading the given header.
    #[must_use]
    pub const fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Returns the header this provider reads.
    #[must_use]
    pub const fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for TrustedHeaderIdentityProvider {
    fn default() -> Self {
        Self::new(HeaderName::from_static("x-user-id"))
    }
}

impl IdentityProvider for TrustedHeaderIdentityProvider {
    fn resolve(&self, headers: &HeaderMap) -> Option<UserId> {
        let raw = headers.get(&self.header)?.to_str().ok()?;
        UserId::new(raw).ok()
    }
}

/// Request-scoped context established by the authentication middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    user_id: UserId,
    request_id: Uuid,
}

impl RequestContext {
    /// Creates a context for `user_id` with a fresh request identifier.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            request_id: Uuid::new_v4(),
        }
    }

    /// Returns the authenticated user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the identifier correlating log lines of this request.
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }
}
