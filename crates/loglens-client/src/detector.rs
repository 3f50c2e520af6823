//! Detector service client — uploads log files for model training and
//! anomaly detection.
//!
//! The detector exposes two multipart endpoints, `/train/` and `/detect/`,
//! each taking a single `file` field. Both respond with JSON whose fields
//! are all optional, so decoding applies its defaults here, at the boundary.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use loglens_common::{LoglensError, Result};

const DETECTOR_DEFAULT_URL: &str = "http://localhost:8000";

/// Client for the anomaly detector service.
pub struct DetectorClient {
    base_url: String,
    client: Client,
}

impl DetectorClient {
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: base_url
                .unwrap_or(DETECTOR_DEFAULT_URL)
                .trim_end_matches('/')
                .to_string(),
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the detector service is reachable.
    pub async fn health_check(&self) -> Result<bool> {
        let resp = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        Ok(resp.status().is_success())
    }

    /// Upload a log file of normal traffic and train the model on it.
    pub async fn train(&self, filename: &str, bytes: Vec<u8>) -> Result<TrainResponse> {
        let resp = self.post_log("/train/", filename, bytes).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.service_error(status, resp).await);
        }

        let body: TrainResponse = resp.json().await?;
        Ok(body)
    }

    /// Upload a log file and return the suspicious request lines found in it.
    pub async fn detect(&self, filename: &str, bytes: Vec<u8>) -> Result<DetectionReport> {
        let resp = self.post_log("/detect/", filename, bytes).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.service_error(status, resp).await);
        }

        let body: DetectResponse = resp.json().await?;
        Ok(DetectionReport {
            anomalies: body.anomalies.unwrap_or_default(),
        })
    }

    async fn post_log(
        &self,
        path: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<reqwest::Response> {
        debug!(path, filename, size = bytes.len(), "uploading log file");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/plain")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?;
        Ok(resp)
    }

    async fn service_error(&self, status: StatusCode, resp: reqwest::Response) -> LoglensError {
        let detail = match resp.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail),
            Err(_) => None,
        };
        LoglensError::Service {
            status: status.as_u16(),
            detail,
        }
    }
}

/// Response to a training upload.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainResponse {
    pub message: Option<String>,
    /// Captured stdout of the training job. Logged, never shown to the user.
    pub output: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    anomalies: Option<Vec<String>>,
}

/// Outcome of a detection upload, with the absent-field default applied.
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    /// Suspicious log lines, in the order the detector returned them.
    pub anomalies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_response_all_fields_optional() {
        let body: TrainResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
        assert_eq!(body.output, None);

        let body: TrainResponse =
            serde_json::from_str(r#"{"message": "ok", "output": "epoch 1"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("ok"));
        assert_eq!(body.output.as_deref(), Some("epoch 1"));
    }

    #[test]
    fn test_detect_response_missing_anomalies_decodes_empty() {
        let body: DetectResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.anomalies, None);

        let body: DetectResponse =
            serde_json::from_str(r#"{"anomalies": ["req1", "req2"]}"#).unwrap();
        assert_eq!(body.anomalies.unwrap(), vec!["req1", "req2"]);
    }

    #[test]
    fn test_error_body_detail_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "bad file"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("bad file"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            DetectorClient::new(Some("http://127.0.0.1:9000/"), Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_default_base_url() {
        let client = DetectorClient::new(None, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), DETECTOR_DEFAULT_URL);
    }
}
