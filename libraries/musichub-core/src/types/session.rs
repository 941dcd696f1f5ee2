/// Session identity type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated identity held by the session store.
///
/// This is exactly the shape persisted under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque user identifier
    pub id: UserId,

    /// Account email
    pub email: String,
}

impl SessionUser {
    /// Create an identity with a freshly generated id (login path)
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
        }
    }

    /// Rebuild an identity from its persisted parts
    pub fn with_id(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}
