use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::Vessel;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Operator-tunable settings, persisted across sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSettings {
    pub server_url: String,
    /// Rows per fleet-table page. Configured once, not per request.
    pub page_size: usize,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Current classified snapshot, replaced wholesale on every fetch.
    pub vessels: Vec<Vessel>,
    /// When the snapshot was fetched; `None` until the first load completes.
    pub fetched_at: Option<SystemTime>,
    pub settings: MonitorSettings,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.settings = persisted.settings;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            settings: self.settings.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub settings: MonitorSettings,
}
