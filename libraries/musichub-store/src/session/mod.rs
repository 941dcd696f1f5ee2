//! Session slice: the currently authenticated identity.
//!
//! Two states, Anonymous and Authenticated. Anonymous is initial; `login`
//! and `restore_session` move to Authenticated, `logout` back to
//! Anonymous. The identity is persisted to session-scoped storage so a
//! reload within the same session can restore it.

use chrono::Utc;
use musichub_core::error::Result;
use musichub_core::storage::{StateStorage, KEY_LAST_LOGIN, KEY_USER};
use musichub_core::types::SessionUser;
use std::sync::Arc;
use tracing::warn;

/// Holds at most one authenticated identity.
pub struct SessionStore {
    storage: Arc<dyn StateStorage>,
    user: Option<SessionUser>,
}

impl SessionStore {
    /// Create an Anonymous store over the given session-scoped storage.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            storage,
            user: None,
        }
    }

    /// Startup constructor: restore a previously persisted identity.
    ///
    /// A parseable `user` entry yields an Authenticated store. A malformed
    /// entry is removed and the store starts Anonymous; a storage read
    /// failure also starts Anonymous.
    pub fn restore(storage: Arc<dyn StateStorage>) -> Self {
        let mut store = Self::new(storage);

        let raw = match store.storage.load(KEY_USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => return store,
            Err(err) => {
                warn!(error = %err, "could not read persisted session");
                return store;
            }
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => store.restore_session(user),
            Err(err) => {
                warn!(error = %err, "discarding malformed persisted session");
                if let Err(err) = store.storage.remove(KEY_USER) {
                    warn!(error = %err, "could not remove malformed session entry");
                }
            }
        }

        store
    }

    /// Sign in: unconditionally replace the current identity and persist
    /// it together with a login timestamp.
    ///
    /// The store performs no validation; that is the caller's concern.
    /// The in-memory transition applies even when persistence fails.
    pub fn login(&mut self, user: SessionUser) -> Result<()> {
        let serialized = serde_json::to_string(&user)?;
        self.user = Some(user);

        self.storage.save(KEY_USER, &serialized)?;
        self.storage.save(KEY_LAST_LOGIN, &Utc::now().to_rfc3339())?;
        Ok(())
    }

    /// Sign out: clear the identity and drop the persisted copy.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;

        self.storage.remove(KEY_USER)?;
        self.storage.remove(KEY_LAST_LOGIN)?;
        Ok(())
    }

    /// Set the identity without touching storage.
    ///
    /// Only meant for the startup path, after the persisted value has
    /// already been read and parsed.
    pub fn restore_session(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// The current identity, if any.
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// True iff an identity is held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
