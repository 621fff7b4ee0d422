//! Compliance evaluation and pooling engine: pure functions over immutable
//! snapshots, no I/O.

pub mod app_state;
pub mod classifier;
pub mod entities;
pub mod pooling;
pub mod query;

#[allow(unused_imports)]
pub use app_state::{AppState, MonitorSettings, PersistedState, DEFAULT_PAGE_SIZE};
#[allow(unused_imports)]
pub use classifier::{
    classify, classify_fleet, fleet_summary, parse_decimal_prefix, INTENSITY_BAR_REFERENCE,
};
#[allow(unused_imports)]
pub use entities::{ComplianceStatus, FleetSummary, RawVesselRecord, Vessel};
#[allow(unused_imports)]
pub use pooling::{pool_selection, pool_vessels, PoolError, PoolOutcome, PoolVerdict};
#[allow(unused_imports)]
pub use query::{filter_fleet, query_fleet, FleetPage, FleetQuery, QueryError, StatusFilter};
