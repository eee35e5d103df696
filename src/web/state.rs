//! Shared application state handed to every handler.

use std::sync::Arc;

use mockable::DefaultClock;

use super::csrf::CsrfTokens;
use super::identity::IdentityProvider;
use super::views::ViewRenderer;
use crate::todo::ports::TodoItemRepository;
use crate::todo::services::TodoItemService;

/// Todo service bound to a runtime-selected repository.
pub type AppTodoService = TodoItemService<dyn TodoItemRepository, DefaultClock>;

/// Cloneable handle to the services, renderer, and request guards.
#[derive(Clone)]
pub struct AppState {
    items: AppTodoService,
    views: Arc<ViewRenderer>,
    identity: Arc<dyn IdentityProvider>,
    csrf: Arc<CsrfTokens>,
}

impl AppState {
    /// Assembles application state.
    #[must_use]
    pub const fn new(
        items: AppTodoService,
        views: Arc<ViewRenderer>,
        identity: Arc<dyn IdentityProvider>,
        csrf: Arc<CsrfTokens>,
    ) -> Self {
        Self {
            items,
            views,
            identity,
            csrf,
        }
    }

    /// Returns the todo item service.
    #[must_use]
    pub const fn items(&self) -> &AppTodoService {
        &self.items
    }

    /// Returns the view renderer.
    #[must_use]
    pub fn views(&self) -> &ViewRenderer {
        &self.views
    }

    /// Returns the identity provider.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Returns the anti-forgery token issuer.
    #[must_use]
    pub fn csrf(&self) -> &CsrfTokens {
        &self.csrf
    }
}
