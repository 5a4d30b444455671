//! User accounts and sessions.
//!
//! Sign-up and sign-in back the web UI's account flow. Users live behind
//! an `RwLock` with optional JSON-file persistence; passwords are stored
//! as SHA-256 digests, never as plaintext. A successful sign-in opens a
//! server-side session identified by an opaque token.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub full_name: String,
    password_digest: String,
}

/// Errors from the account and session flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required field was blank
    #[error("all fields are required")]
    MissingField,

    /// Sign-up with an email that already has an account
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Sign-in with an unknown email or wrong password
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Failed to read or write the users file
    #[error("failed to persist users: {message}")]
    Io { message: String },

    /// The users file is malformed
    #[error("users file is not valid JSON: {message}")]
    Json { message: String },
}

/// Thread-safe user registry.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
    path: Option<PathBuf>,
}

impl UserStore {
    /// Create an empty in-memory store.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            path: None,
        }
    }

    /// Create a store backed by a JSON file (created on first sign-up).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let users = if path.exists() {
            let json = std::fs::read_to_string(path).map_err(|e| AuthError::Io {
                message: format!("failed to read {path:?}: {e}"),
            })?;
            let users: Vec<User> = serde_json::from_str(&json).map_err(|e| AuthError::Json {
                message: e.to_string(),
            })?;
            users.into_iter().map(|u| (u.email.clone(), u)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(users)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Register a new account. All fields are required.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<User, AuthError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.trim().is_empty() || full_name.trim().is_empty() {
            return Err(AuthError::MissingField);
        }

        let mut guard = self.inner.write().await;
        if guard.contains_key(&email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            email: email.clone(),
            full_name: full_name.trim().to_string(),
            password_digest: password_digest(password),
        };
        guard.insert(email, user.clone());
        self.persist(&guard)?;
        Ok(user)
    }

    /// Verify credentials. Unknown emails and wrong passwords are
    /// indistinguishable to the caller.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        let guard = self.inner.read().await;
        let user = guard.get(&email).ok_or(AuthError::InvalidCredentials)?;
        if user.password_digest != password_digest(password) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user.clone())
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether no users are registered.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    fn persist(&self, users: &HashMap<String, User>) -> Result<(), AuthError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut list: Vec<&User> = users.values().collect();
        list.sort_by(|a, b| a.email.cmp(&b.email));
        let json = serde_json::to_string_pretty(&list).map_err(|e| AuthError::Json {
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| AuthError::Io {
            message: format!("failed to write {path:?}: {e}"),
        })
    }
}

/// SHA-256 digest of a password, hex-encoded.
fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// An open session.
#[derive(Debug, Clone)]
struct Session {
    email: String,
    issued_at: DateTime<Utc>,
}

/// Thread-safe session registry: opaque token → signed-in user.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user and return its token.
    pub async fn open(&self, email: impl Into<String>) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            email: email.into(),
            issued_at: Utc::now(),
        };
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    /// Resolve a token to the signed-in email, if the session is open.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        let guard = self.inner.read().await;
        guard.get(token).map(|s| s.email.clone())
    }

    /// When the session behind a token was opened.
    pub async fn issued_at(&self, token: &str) -> Option<DateTime<Utc>> {
        let guard = self.inner.read().await;
        guard.get(token).map(|s| s.issued_at)
    }

    /// Close a session. Returns false if the token was unknown.
    pub async fn close(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}
