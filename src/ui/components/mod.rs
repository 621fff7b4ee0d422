pub mod kpi_card;
pub mod pagination;
pub mod status_badge;
pub mod toast;
pub mod vessel_table;
