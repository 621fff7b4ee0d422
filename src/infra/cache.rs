//! Persistent on-disk cache for the last fleet snapshot.
//!
//! Lets the dashboard come up with data when the compliance server is down,
//! flagged as stale in the UI.

use std::{
    fs,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::domain::RawVesselRecord;

const CACHE_FILENAME: &str = "fleet_snapshot.json";

/// Snapshot TTL: 24 hours. The upstream CSV is regenerated at most daily.
pub const SNAPSHOT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCache {
    /// Unix timestamp (seconds) when this snapshot was fetched.
    pub cached_at: u64,
    pub records: Vec<RawVesselRecord>,
}

impl SnapshotCache {
    pub fn new(records: Vec<RawVesselRecord>) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { cached_at, records }
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    pub fn is_expired(&self) -> bool {
        self.age() > SNAPSHOT_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        let secs = self.age().as_secs();
        if secs < 60 {
            format!("{secs}s")
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86400)
        }
    }
}

fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fleet-compliance-monitor");
        let _ = fs::create_dir_all(&base);
        base.join(CACHE_FILENAME)
    })
    .clone()
}

/// Load the last snapshot from disk, if any.
pub fn load_snapshot_cache() -> Option<SnapshotCache> {
    let path = cache_path();

    if !path.exists() {
        println!("[snapshot] No cached snapshot at {}", path.display());
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<SnapshotCache>(&content) {
            Ok(cache) => {
                println!(
                    "[snapshot] Loaded {} records (age: {})",
                    cache.records.len(),
                    cache.age_string()
                );
                Some(cache)
            }
            Err(e) => {
                println!("[snapshot] Failed to parse cached snapshot: {e}");
                None
            }
        },
        Err(e) => {
            println!("[snapshot] Failed to read cached snapshot: {e}");
            None
        }
    }
}

/// Save a snapshot to disk.
pub fn save_snapshot_cache(cache: &SnapshotCache) -> Result<(), std::io::Error> {
    let path = cache_path();
    let content = serde_json::to_string(cache)?;
    fs::write(&path, content)?;
    println!(
        "[snapshot] Saved {} records to {}",
        cache.records.len(),
        path.display()
    );
    Ok(())
}
