//! Top Tier Men membership platform backend.
//!
//! Library crate shared by the `toptier` server binary and the `maintenance`
//! CLI. See [`server`] for the backend architecture overview.

pub mod model;
pub mod server;
