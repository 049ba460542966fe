//! Read-only distribution of a comparison under a random identifier.

use crate::error::Error;
use crate::model::ComparisonResult;
use crate::storage::Database;
use tracing::{debug, info};
use uuid::Uuid;

/// Key/value persistence for shared comparisons.
///
/// Each identifier is written at most once.
pub trait ShareStore {
    fn put(&self, share_id: &str, result: &ComparisonResult) -> Result<(), Error>;
    fn get(&self, share_id: &str) -> Result<Option<ComparisonResult>, Error>;
}

impl ShareStore for Database {
    fn put(&self, share_id: &str, result: &ComparisonResult) -> Result<(), Error> {
        let data = serde_json::to_string(result)?;
        self.insert_comparison_result(
            share_id,
            &data,
            result.hydraulic.len() as i64,
            result.electric.len() as i64,
            result.machine_count() as i64,
        )?;
        Ok(())
    }

    fn get(&self, share_id: &str) -> Result<Option<ComparisonResult>, Error> {
        match self.get_comparison_data(share_id)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }
}

/// A persisted comparison's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    pub share_id: String,
}

impl ShareRecord {
    pub fn url(&self, origin: &str) -> String {
        share_url(origin, &self.share_id)
    }
}

pub fn new_share_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn is_share_id(share_id: &str) -> bool {
    canonical_share_id(share_id).is_some()
}

/// `<origin>/share/<share_id>`
pub fn share_url(origin: &str, share_id: &str) -> String {
    format!("{}/share/{}", origin.trim_end_matches('/'), share_id)
}

/// Store a comparison under a freshly generated identifier.
pub fn publish(store: &dyn ShareStore, result: &ComparisonResult) -> Result<ShareRecord, Error> {
    let share_id = new_share_id();
    store.put(&share_id, result)?;
    info!("Comparison shared as {}", share_id);
    Ok(ShareRecord { share_id })
}

/// Lowercase hyphenated form of any accepted UUID spelling, the form ids are stored under.
pub fn canonical_share_id(share_id: &str) -> Option<String> {
    Uuid::parse_str(share_id.trim())
        .ok()
        .map(|id| id.hyphenated().to_string())
}

/// Load a shared comparison. Malformed and unknown identifiers are errors.
pub fn fetch_shared(store: &dyn ShareStore, share_id: &str) -> Result<ComparisonResult, Error> {
    let share_id = canonical_share_id(share_id)
        .ok_or_else(|| Error::InvalidShareId(share_id.trim().to_string()))?;
    debug!("Fetching shared comparison {}", share_id);
    store
        .get(&share_id)?
        .ok_or(Error::ShareNotFound(share_id))
}
