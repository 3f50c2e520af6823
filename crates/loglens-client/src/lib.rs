//! loglens-client — HTTP client for the external anomaly detector service.

pub mod detector;

pub use detector::{DetectionReport, DetectorClient, TrainResponse};
