//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single source of truth for who is signed in and which
//! tokens the API client should send. Components get it from Leptos context
//! as `RwSignal<AuthStore<LocalStorage>>`; tests build it over `MemoryStorage`.
//!
//! PERSISTENCE
//! ===========
//! After every mutation the subset `{user, accessToken, refreshToken,
//! isAuthenticated}` is written under `AUTH_STORAGE_KEY`. `is_loading` and
//! `error` are session-local and reset on reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage::{self, Storage};

/// Storage key holding the persisted auth snapshot.
pub const AUTH_STORAGE_KEY: &str = "dentmart-auth";

/// Authentication state: current user, session tokens and UI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// True only between `set_user` and the next `clear_auth`.
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuth {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    is_authenticated: bool,
}

impl PersistedAuth {
    fn from_state(state: &AuthState) -> Self {
        Self {
            user: state.user.clone(),
            access_token: state.access_token.clone(),
            refresh_token: state.refresh_token.clone(),
            is_authenticated: state.is_authenticated,
        }
    }
}

/// Access token from the persisted snapshot, if any.
pub fn stored_access_token(storage: &impl Storage) -> Option<String> {
    storage::load_json::<PersistedAuth>(storage, AUTH_STORAGE_KEY)?
        .access_token
        .filter(|t| !t.is_empty())
}

/// Auth state bound to the storage it persists into.
#[derive(Clone, Debug)]
pub struct AuthStore<S> {
    state: AuthState,
    storage: S,
}

impl<S: Storage> AuthStore<S> {
    /// Build a store, restoring the persisted snapshot when one is readable.
    pub fn restore(storage: S) -> Self {
        let mut state = AuthState::default();
        if let Some(saved) = storage::load_json::<PersistedAuth>(&storage, AUTH_STORAGE_KEY) {
            // A true flag without a user cannot come from set_user.
            state.is_authenticated = saved.is_authenticated && saved.user.is_some();
            state.user = saved.user;
            state.access_token = saved.access_token;
            state.refresh_token = saved.refresh_token;
        }
        Self { state, storage }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.state.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn set_user(&mut self, user: User) {
        self.state.user = Some(user);
        self.state.is_authenticated = true;
        self.state.error = None;
        self.persist();
    }

    /// Replace both tokens. Authentication status is left alone.
    pub fn set_tokens(&mut self, access_token: Option<String>, refresh_token: Option<String>) {
        self.state.access_token = access_token;
        self.state.refresh_token = refresh_token;
        self.persist();
    }

    /// Forget the user and both tokens (logout).
    pub fn clear_auth(&mut self) {
        self.state.user = None;
        self.state.access_token = None;
        self.state.refresh_token = None;
        self.state.is_authenticated = false;
        self.state.error = None;
        self.persist();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.state.is_loading = loading;
        self.persist();
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
        self.persist();
    }

    fn persist(&self) {
        storage::save_json(&self.storage, AUTH_STORAGE_KEY, &PersistedAuth::from_state(&self.state));
    }
}
