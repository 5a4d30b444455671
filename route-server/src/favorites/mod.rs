//! Favorite routes store.
//!
//! Holds the user's saved routes (a label plus origin and destination
//! addresses) behind an `RwLock`, with optional JSON-file persistence.
//! New stores are seeded with a few sample routes so the list is never
//! empty on first launch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A saved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub name: String,
    pub from: String,
    pub to: String,
}

impl Favorite {
    /// Display text for the destination: everything before the first
    /// comma (saved addresses tend to be "street, city").
    pub fn short_destination(&self) -> &str {
        match self.to.split_once(',') {
            Some((head, _)) => head.trim(),
            None => self.to.trim(),
        }
    }
}

/// Errors from the favorites store.
#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    /// No favorite with the given id
    #[error("no favorite with id {0}")]
    UnknownId(u64),

    /// Failed to read or write the favorites file
    #[error("failed to persist favorites: {message}")]
    Io { message: String },

    /// The favorites file is malformed
    #[error("favorites file is not valid JSON: {message}")]
    Json { message: String },
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    routes: Vec<Favorite>,
}

/// Thread-safe favorite routes store.
#[derive(Clone)]
pub struct FavoriteStore {
    inner: Arc<RwLock<Inner>>,
    path: Option<PathBuf>,
}

impl FavoriteStore {
    /// Create an in-memory store with the sample routes.
    pub fn seeded() -> Self {
        Self::from_routes(seed_routes(), None)
    }

    /// Create a store backed by a JSON file.
    ///
    /// Reads the file if it exists; otherwise starts from the sample
    /// routes and writes them on the first mutation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FavoriteError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::from_routes(seed_routes(), Some(path.to_path_buf())));
        }

        let json = std::fs::read_to_string(path).map_err(|e| FavoriteError::Io {
            message: format!("failed to read {path:?}: {e}"),
        })?;
        let routes: Vec<Favorite> = serde_json::from_str(&json).map_err(|e| FavoriteError::Json {
            message: e.to_string(),
        })?;

        Ok(Self::from_routes(routes, Some(path.to_path_buf())))
    }

    fn from_routes(routes: Vec<Favorite>, path: Option<PathBuf>) -> Self {
        let next_id = routes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { next_id, routes })),
            path,
        }
    }

    /// All favorites, in insertion order.
    pub async fn list(&self) -> Vec<Favorite> {
        let guard = self.inner.read().await;
        guard.routes.clone()
    }

    /// Add a favorite and return it with its assigned id.
    pub async fn add(
        &self,
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Favorite, FavoriteError> {
        let mut guard = self.inner.write().await;
        let favorite = Favorite {
            id: guard.next_id,
            name: name.into(),
            from: from.into(),
            to: to.into(),
        };
        guard.next_id += 1;
        guard.routes.push(favorite.clone());
        self.persist(&guard.routes)?;
        Ok(favorite)
    }

    /// Replace the destination of a favorite.
    pub async fn rename_destination(
        &self,
        id: u64,
        to: impl Into<String>,
    ) -> Result<Favorite, FavoriteError> {
        let mut guard = self.inner.write().await;
        let favorite = guard
            .routes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FavoriteError::UnknownId(id))?;
        favorite.to = to.into();
        let updated = favorite.clone();
        self.persist(&guard.routes)?;
        Ok(updated)
    }

    /// Remove a favorite.
    pub async fn remove(&self, id: u64) -> Result<(), FavoriteError> {
        let mut guard = self.inner.write().await;
        let before = guard.routes.len();
        guard.routes.retain(|r| r.id != id);
        if guard.routes.len() == before {
            return Err(FavoriteError::UnknownId(id));
        }
        self.persist(&guard.routes)?;
        Ok(())
    }

    fn persist(&self, routes: &[Favorite]) -> Result<(), FavoriteError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(routes).map_err(|e| FavoriteError::Json {
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| FavoriteError::Io {
            message: format!("failed to write {path:?}: {e}"),
        })
    }
}

/// The sample routes a fresh store starts with.
fn seed_routes() -> Vec<Favorite> {
    vec![
        Favorite {
            id: 1,
            name: "Way to work".into(),
            from: "Herzl St 25, Tel Aviv".into(),
            to: "High-Tech Park, Herzliya".into(),
        },
        Favorite {
            id: 2,
            name: "Way home".into(),
            from: "High-Tech Park, Herzliya".into(),
            to: "Herzl St 25, Tel Aviv".into(),
        },
        Favorite {
            id: 3,
            name: "Shopping".into(),
            from: "Herzl St 25, Tel Aviv".into(),
            to: "Dizengoff Center, Tel Aviv".into(),
        },
    ]
}
