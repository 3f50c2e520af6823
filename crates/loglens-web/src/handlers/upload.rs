//! Train/detect form submissions — forward the uploaded log file to the
//! detector service and render the outcome.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::{debug, error, info};

use loglens_common::LoglensError;

use crate::handlers::page::{render_page, PageView};
use crate::messages;
use crate::state::{SharedState, Workflow};

pub async fn train_submit(State(state): State<SharedState>, multipart: Multipart) -> Html<String> {
    let Some(upload) = read_log_upload(multipart).await else {
        return Html(render_page(&state, &PageView::with_message(messages::SELECT_TRAIN_FILE)));
    };
    let Some(guard) = state.try_begin(Workflow::Train) else {
        return Html(render_page(&state, &PageView::with_message(messages::TRAIN_BUSY)));
    };

    info!(filename = %upload.filename, size = upload.bytes.len(), "forwarding training log to detector");
    let view = match state.detector.train(&upload.filename, upload.bytes).await {
        Ok(resp) => {
            if let Some(output) = resp.output {
                debug!(%output, "training job output");
            }
            PageView::with_message(
                resp.message.unwrap_or_else(|| messages::TRAIN_DONE.to_string()),
            )
        }
        Err(err) => {
            error!(%err, "training request failed");
            PageView::with_message(error_text(err, messages::TRAIN_FAILED))
        }
    };

    drop(guard);
    Html(render_page(&state, &view))
}

pub async fn detect_submit(State(state): State<SharedState>, multipart: Multipart) -> Html<String> {
    let Some(upload) = read_log_upload(multipart).await else {
        return Html(render_page(&state, &PageView::with_message(messages::SELECT_DETECT_FILE)));
    };
    let Some(guard) = state.try_begin(Workflow::Detect) else {
        return Html(render_page(&state, &PageView::with_message(messages::DETECT_BUSY)));
    };

    info!(filename = %upload.filename, size = upload.bytes.len(), "forwarding log to detector for analysis");
    let view = match state.detector.detect(&upload.filename, upload.bytes).await {
        Ok(report) => {
            let message = if report.anomalies.is_empty() {
                messages::NO_ANOMALIES.to_string()
            } else {
                messages::anomaly_count(report.anomalies.len())
            };
            PageView {
                message: Some(message),
                anomalies: report.anomalies,
            }
        }
        Err(err) => {
            error!(%err, "detection request failed");
            PageView::with_message(error_text(err, messages::DETECT_FAILED))
        }
    };

    drop(guard);
    Html(render_page(&state, &view))
}

struct LogUpload {
    filename: String,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of the form post. A browser submits the field
/// with an empty filename when nothing was picked, so that counts as no
/// selection too.
async fn read_log_upload(mut multipart: Multipart) -> Option<LogUpload> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return None;
        }
        let bytes = field.bytes().await.ok()?;
        return Some(LogUpload {
            filename,
            bytes: bytes.to_vec(),
        });
    }
    None
}

fn error_text(err: LoglensError, fallback: &str) -> String {
    match err {
        LoglensError::Service { detail: Some(detail), .. } => detail,
        LoglensError::Service { detail: None, .. } => fallback.to_string(),
        other => other.to_string(),
    }
}
