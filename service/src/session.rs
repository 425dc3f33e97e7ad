//! Session [`Store`] definitions.

use tokio::sync::RwLock;

use crate::domain::user::session::{Session, Token};

/// Holder of the current [`Session`].
///
/// Transitions wholesale between anonymous ([`None`]) and authenticated
/// ([`Some`]): the token and the user are replaced or cleared together,
/// so the store can never hold a partial session. Nothing is persisted
/// across restarts.
#[derive(Debug, Default)]
pub struct Store {
    /// Current [`Session`], if any.
    current: RwLock<Option<Session>>,
}

impl Store {
    /// Replaces the current [`Session`] with the provided one.
    pub async fn set(&self, session: Session) {
        *self.current.write().await = Some(session);
    }

    /// Clears the current [`Session`] unconditionally.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    /// Returns a snapshot of the current [`Session`], if authenticated.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Returns the bearer [`Token`] of the current [`Session`], if any.
    pub async fn token(&self) -> Option<Token> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    /// Indicates whether a [`Session`] is established.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
