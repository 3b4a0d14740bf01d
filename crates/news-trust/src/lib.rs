//! Trust-rating heuristics for aggregated news articles.
//!
//! The [`trust`] module holds the scorer and its HTTP router; [`config`],
//! [`error`] and [`telemetry`] carry the service plumbing shared with the API
//! binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod trust;
