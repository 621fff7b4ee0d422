//! Thin asynchronous client for the compliance engine API.
//!
//! - Fetches the fleet snapshot from `GET api/fleet-status`.
//! - Maintains a TTL'd in-memory cache with stale fallbacks, backed by the
//!   on-disk snapshot cache for cold starts while the server is down.

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::RawVesselRecord;
use crate::infra::cache::{load_snapshot_cache, save_snapshot_cache, SnapshotCache};

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
const USER_AGENT: &str = "fleet-compliance-monitor/0.1.0";

#[derive(Debug, Error)]
pub enum FleetApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }
}

/// The server replies `{"data": [...]}` on success and `{"error": "..."}`
/// when its source CSV has not been generated yet.
#[derive(Debug, Deserialize)]
struct FleetEnvelope {
    #[serde(default)]
    data: Option<Vec<VesselRecordDto>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct FleetClient {
    http: Client,
    base_url: Url,
    cache: Arc<Mutex<Option<Cached<Vec<RawVesselRecord>>>>>,
    ttl: Duration,
}

impl FleetClient {
    pub fn new(base: &str) -> Result<Self, FleetApiError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            cache: Arc::new(Mutex::new(None)),
            ttl: DEFAULT_TTL,
        })
    }

    #[allow(dead_code)]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn get_fleet(&self) -> Result<CachedPayload<Vec<RawVesselRecord>>, FleetApiError> {
        if let Some(payload) = self.cached_fleet().await {
            return Ok(payload);
        }

        let url = self.base_url.join("api/fleet-status")?;
        match self.fetch_fleet(url).await {
            Ok(records) => {
                let snapshot = SnapshotCache::new(records.clone());
                if let Err(e) = save_snapshot_cache(&snapshot) {
                    println!("[fleet-api] Warning: failed to save snapshot cache: {e}");
                }
                Ok(self.store_fleet(records).await)
            }
            Err(error) => {
                println!("[fleet-api] Fetch failed: {error}; falling back to cached data.");
                if let Some(stale) = self.cached_fleet_stale().await {
                    return Ok(stale);
                }
                if let Some(disk) = load_snapshot_cache() {
                    if disk.is_expired() {
                        println!(
                            "[snapshot] Cached snapshot is {} old; showing it anyway.",
                            disk.age_string()
                        );
                    }
                    return Ok(CachedPayload::new(
                        disk.records.clone(),
                        disk.fetched_at(),
                        CacheStatus::Stale,
                    ));
                }
                Err(error)
            }
        }
    }

    async fn fetch_fleet(&self, url: Url) -> Result<Vec<RawVesselRecord>, FleetApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: FleetEnvelope = response.json().await?;

        if let Some(message) = envelope.error {
            return Err(FleetApiError::Api(message));
        }

        let data = envelope
            .data
            .ok_or_else(|| FleetApiError::Api("response missing data".into()))?;
        Ok(data.into_iter().map(RawVesselRecord::from).collect())
    }

    async fn cached_fleet(&self) -> Option<CachedPayload<Vec<RawVesselRecord>>> {
        let cache = self.cache.lock().await;
        let result = cache.as_ref().and_then(|entry| entry.if_fresh(self.ttl));
        if result.is_some() {
            println!("[fleet-api] Serving in-memory fleet snapshot");
        }
        result
    }

    async fn cached_fleet_stale(&self) -> Option<CachedPayload<Vec<RawVesselRecord>>> {
        let cache = self.cache.lock().await;
        cache.as_ref().map(Cached::stale)
    }

    async fn store_fleet(
        &self,
        records: Vec<RawVesselRecord>,
    ) -> CachedPayload<Vec<RawVesselRecord>> {
        let fetched_at = SystemTime::now();
        let payload = CachedPayload::new(records.clone(), fetched_at, CacheStatus::Fresh);
        let mut cache = self.cache.lock().await;
        *cache = Some(Cached::new(records, fetched_at));
        payload
    }
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<T>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.value.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn stale(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Stale)
    }
}

/// Wire shape of one vessel row. The upstream CSV-to-JSON conversion emits
/// numbers for rows that parsed cleanly and strings for dirty ones, so the
/// contract fields accept either and normalize to the decimal-literal string
/// the classifier consumes. Extra columns (`Status`, `CO2_emissions`, ...)
/// are ignored.
#[derive(Debug, Deserialize)]
struct VesselRecordDto {
    #[serde(deserialize_with = "decimal_literal")]
    ship_id: String,
    #[serde(default)]
    ship_type: Option<String>,
    #[serde(rename = "GHG Intensity", deserialize_with = "decimal_literal")]
    ghg_intensity: String,
    #[serde(rename = "Compliance Balance", deserialize_with = "decimal_literal")]
    compliance_balance: String,
}

impl From<VesselRecordDto> for RawVesselRecord {
    fn from(dto: VesselRecordDto) -> Self {
        Self {
            ship_id: dto.ship_id,
            ship_type: dto.ship_type.unwrap_or_else(|| "Unknown".to_string()),
            ghg_intensity: dto.ghg_intensity,
            compliance_balance: dto.compliance_balance,
        }
    }
}

fn decimal_literal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_accepts_string_and_number_fields() {
        let json = r#"{
            "ship_id": "S1",
            "ship_type": "Tanker",
            "GHG Intensity": 95.2,
            "Compliance Balance": "-120.50",
            "Status": "Deficit",
            "CO2_emissions": 1234.5
        }"#;
        let dto: VesselRecordDto = serde_json::from_str(json).unwrap();
        let record = RawVesselRecord::from(dto);
        assert_eq!(record.ship_id, "S1");
        assert_eq!(record.ghg_intensity, "95.2");
        assert_eq!(record.compliance_balance, "-120.50");
    }

    #[test]
    fn envelope_error_branch_deserializes() {
        let json = r#"{"error": "Data not found. Please run src/engine.py first."}"#;
        let envelope: FleetEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.error.unwrap().starts_with("Data not found"));
    }

    #[test]
    fn envelope_data_branch_deserializes() {
        let json = r#"{"data": [{"ship_id": 7, "ship_type": "Bulk",
            "GHG Intensity": "60.0", "Compliance Balance": 300.0}]}"#;
        let envelope: FleetEnvelope = serde_json::from_str(json).unwrap();
        let records: Vec<RawVesselRecord> = envelope
            .data
            .unwrap()
            .into_iter()
            .map(RawVesselRecord::from)
            .collect();
        assert_eq!(records[0].ship_id, "7");
        assert_eq!(records[0].compliance_balance, "300");
    }
}
