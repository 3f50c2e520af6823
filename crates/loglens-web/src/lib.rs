//! loglens-web — Web GUI for the log anomaly detector.
//! Provides a single-page interface with:
//!   - Training upload: teach the model what normal traffic looks like
//!   - Detection upload: scan a log and list suspicious requests

pub mod config;
pub mod handlers;
pub mod messages;
pub mod router;
pub mod state;
