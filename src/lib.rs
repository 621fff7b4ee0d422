//! Fleet compliance monitor.
//!
//! `domain` is the pure compliance engine (classification, querying,
//! pooling); `infra` talks to the compliance server; `ui` is the Dioxus
//! shell that renders it all.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
