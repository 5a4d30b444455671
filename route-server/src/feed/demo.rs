//! Demo route feed.
//!
//! Loads sample route records from JSON files and serves them as if they
//! came from a live trip-planning API. Useful for development and testing
//! without real API credentials.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::RouteRecord;

use super::error::FeedError;

/// Demo feed that serves route records from JSON files.
///
/// Expects files named `{destination}.json` (e.g. `central_station.json`),
/// each containing an array of route records in any supported producer
/// dialect. Underscores in filenames stand for spaces in the destination
/// name.
#[derive(Clone)]
pub struct DemoFeed {
    /// Pre-loaded datasets, keyed by lowercased destination name.
    datasets: Arc<RwLock<HashMap<String, Vec<RouteRecord>>>>,
    loaded_at: DateTime<Utc>,
}

impl DemoFeed {
    /// Create a demo feed by loading JSON files from a directory.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let datasets = read_datasets(data_dir.as_ref())?;
        Ok(Self {
            datasets: Arc::new(RwLock::new(datasets)),
            loaded_at: Utc::now(),
        })
    }

    /// Fetch route candidates whose destination matches the query
    /// (case-insensitive substring match).
    ///
    /// Mimics the `FeedClient::fetch_routes` interface; results are
    /// ordered by destination name for determinism.
    pub async fn fetch_routes(&self, destination: &str) -> Result<Vec<RouteRecord>, FeedError> {
        let needle = destination.trim().to_lowercase();
        let datasets = self.datasets.read().await;

        let mut matching: Vec<(&String, &Vec<RouteRecord>)> = datasets
            .iter()
            .filter(|(name, _)| name.contains(&needle))
            .collect();
        matching.sort_by(|a, b| a.0.cmp(b.0));

        Ok(matching
            .into_iter()
            .flat_map(|(_, records)| records.iter().cloned())
            .collect())
    }

    /// List destinations available in the demo data.
    pub async fn available_destinations(&self) -> Vec<String> {
        let datasets = self.datasets.read().await;
        let mut names: Vec<String> = datasets.keys().cloned().collect();
        names.sort();
        names
    }

    /// When the demo data was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Reload demo data from disk (useful for development).
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<usize, FeedError> {
        let new_datasets = read_datasets(data_dir.as_ref())?;
        let count = new_datasets.len();
        let mut datasets = self.datasets.write().await;
        *datasets = new_datasets;
        Ok(count)
    }
}

/// Read all `{destination}.json` files in a directory.
fn read_datasets(data_dir: &Path) -> Result<HashMap<String, Vec<RouteRecord>>, FeedError> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| FeedError::Io {
        message: format!("failed to read {data_dir:?}: {e}"),
    })?;

    let mut datasets = HashMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| FeedError::Io {
            message: format!("failed to read directory entry: {e}"),
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| FeedError::Io {
                message: format!("invalid filename: {path:?}"),
            })?;
        let destination = stem.replace('_', " ").to_lowercase();

        let json = std::fs::read_to_string(&path).map_err(|e| FeedError::Io {
            message: format!("failed to read {path:?}: {e}"),
        })?;
        let records: Vec<RouteRecord> =
            serde_json::from_str(&json).map_err(|e| FeedError::Json {
                message: format!("failed to parse {path:?}: {e}"),
            })?;

        datasets.insert(destination, records);
    }

    if datasets.is_empty() {
        return Err(FeedError::Io {
            message: format!("no demo route files found in {data_dir:?}"),
        });
    }

    Ok(datasets)
}
