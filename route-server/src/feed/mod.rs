//! Route feed boundary.
//!
//! A feed produces raw [`RouteRecord`](crate::domain::RouteRecord)s for a
//! destination query. Two producers exist: a directory of demo JSON files
//! and the HTTP trip-planning API. The server talks to either through
//! [`RouteFeed`]; the normalizer downstream never knows which one
//! populated a record.

mod client;
mod demo;
mod error;

pub use client::{FeedClient, FeedConfig};
pub use demo::DemoFeed;
pub use error::FeedError;

use crate::domain::RouteRecord;

/// Limits applied to destination searches.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of route candidates to return.
    pub max_results: usize,

    /// Minimum query length (after trimming) to accept.
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 20,
            min_query_chars: 1,
        }
    }
}

/// The route feed a server instance is wired to.
pub enum RouteFeed {
    /// Static demo datasets loaded from disk.
    Demo(DemoFeed),
    /// Live trip-planning API.
    Api(FeedClient),
}

impl RouteFeed {
    /// Fetch route candidates for a destination.
    pub async fn fetch_routes(&self, destination: &str) -> Result<Vec<RouteRecord>, FeedError> {
        match self {
            RouteFeed::Demo(demo) => demo.fetch_routes(destination).await,
            RouteFeed::Api(client) => client.fetch_routes(destination).await,
        }
    }
}
