pub mod fleet;
pub mod pooling;
pub mod settings;

pub use fleet::FleetPage;
pub use pooling::PoolingPage;
pub use settings::SettingsPage;
