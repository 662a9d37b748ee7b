//! Auth Context
//!
//! Session state provided via Leptos Context API. Constructed once at the
//! top of the tree; consuming it anywhere else is a wiring defect and fails
//! loudly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::User;
use crate::store::{SessionState, SessionStateStoreFields, SessionStore};

/// Handle to the session store, provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: SessionStore,
}

impl AuthContext {
    /// Create the session store, provide it to the tree, and return a handle
    pub fn provide() -> Self {
        let ctx = Self {
            session: Store::new(SessionState::new()),
        };
        provide_context(ctx);
        ctx
    }

    /// One startup call against the backend session; everything else
    /// derives from its result
    pub fn init(&self) {
        let session = self.session;
        spawn_local(async move {
            match api::check_session().await {
                Ok(check) if check.authenticated => session.user().set(check.user),
                Ok(_) => session.user().set(None),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[AUTH] session check failed: {}", err).into());
                    session.user().set(None);
                }
            }
            session.checking().set(false);
        });
    }

    pub fn user(&self) -> Option<User> {
        self.session.user().get()
    }

    pub fn is_loading(&self) -> bool {
        self.session.checking().get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.user().with(|user| user.is_some())
    }

    /// End the backend session, then force a full navigation to the root.
    /// All in-memory state is discarded on purpose.
    pub fn logout(&self) {
        let session = self.session;
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                web_sys::console::error_1(&format!("[AUTH] logout failed: {}", err).into());
                return;
            }
            session.user().set(None);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    }
}

/// Panics when called outside the provider: that is a programming error,
/// not a runtime condition
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided inside App")
}
