//! Session Store
//!
//! Current-user state mirrored from the backend session, held in a
//! reactive_stores Store for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Authenticated user; None until the startup check resolves
    pub user: Option<User>,
    /// True while the startup session check is in flight
    pub checking: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            checking: true,
        }
    }
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;
