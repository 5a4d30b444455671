//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::{SessionStore, UserStore};
use crate::cache::CachedFeed;
use crate::favorites::FavoriteStore;
use crate::feed::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached route feed
    pub feed: Arc<CachedFeed>,

    /// Favorite routes store
    pub favorites: FavoriteStore,

    /// Registered users
    pub users: UserStore,

    /// Open sessions
    pub sessions: SessionStore,

    /// Search limits
    pub search: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        feed: CachedFeed,
        favorites: FavoriteStore,
        users: UserStore,
        search: SearchConfig,
    ) -> Self {
        Self {
            feed: Arc::new(feed),
            favorites,
            users,
            sessions: SessionStore::new(),
            search: Arc::new(search),
        }
    }
}
