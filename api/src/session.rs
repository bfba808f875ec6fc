use std::sync::{Arc, Mutex, PoisonError, RwLock};

use secrecy::SecretString;
use types::SessionStatus;

/// Where the session token outlives the page.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<SecretString>;
    fn save(&self, token: &SecretString);
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Option<SecretString> {
        (**self).load()
    }

    fn save(&self, token: &SecretString) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Keeps the token in memory only. Used by native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &SecretString) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// The signed-in state shared by the client and the UI.
///
/// Cloning is cheap; every clone observes the same token.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<SecretString>>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Restores whatever token the store already holds.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = store.load();
        Self {
            token: Arc::new(RwLock::new(token)),
            store: Arc::new(store),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    pub fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn status(&self) -> SessionStatus {
        if self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
        {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn sign_in(&self, token: SecretString) {
        self.store.save(&token);
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        tracing::info!("admin session started");
    }

    pub fn sign_out(&self) {
        self.store.clear();
        let had_token = self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if had_token {
            tracing::info!("admin session ended");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}
