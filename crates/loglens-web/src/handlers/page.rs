//! Landing page — the two upload forms plus the latest run's outcome.

use axum::{extract::State, response::Html};

use crate::state::{SharedState, Workflow};

/// Everything the page renders beyond the static forms: the status message
/// of the last submission and the anomalies a successful detection returned.
#[derive(Debug, Default)]
pub struct PageView {
    pub message: Option<String>,
    pub anomalies: Vec<String>,
}

impl PageView {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            anomalies: Vec::new(),
        }
    }
}

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    Html(render_page(&state, &PageView::default()))
}

pub fn render_page(state: &SharedState, view: &PageView) -> String {
    let train_disabled = if state.is_busy(Workflow::Train) { " disabled" } else { "" };
    let detect_disabled = if state.is_busy(Workflow::Detect) { " disabled" } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>AI 기반 웹 로그 이상 탐지 시스템</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="container mt-5">
    <h1 class="mb-4">AI 기반 웹 로그 이상 탐지 시스템</h1>

    <div class="row">
        <div class="col-md-6">
            <div class="card">
                <div class="card-body">
                    <h2 class="card-title">1단계: 모델 학습</h2>
                    <p class="card-text text-muted">정상적인 웹 로그 파일을 업로드하여 AI 모델을 학습시킵니다.</p>
                    <form class="upload-form" method="POST" action="/train" enctype="multipart/form-data">
                        <div class="mb-3">
                            <label for="trainFile" class="form-label">학습용 로그 파일 (.log, .txt)</label>
                            <input type="file" class="form-control" id="trainFile" name="file" accept=".log,.txt">
                        </div>
                        <button type="submit" class="btn btn-primary" data-pending="학습 중..."{train_disabled}>모델 학습 시작</button>
                    </form>
                </div>
            </div>
        </div>

        <div class="col-md-6">
            <div class="card">
                <div class="card-body">
                    <h2 class="card-title">2단계: 이상 탐지</h2>
                    <p class="card-text text-muted">분석하고 싶은 로그 파일을 업로드하여 비정상 접근을 탐지합니다.</p>
                    <form class="upload-form" method="POST" action="/detect" enctype="multipart/form-data">
                        <div class="mb-3">
                            <label for="detectFile" class="form-label">탐지용 로그 파일 (.log, .txt)</label>
                            <input type="file" class="form-control" id="detectFile" name="file" accept=".log,.txt">
                        </div>
                        <button type="submit" class="btn btn-success" data-pending="탐지 중..."{detect_disabled}>이상 탐지 시작</button>
                    </form>
                </div>
            </div>
        </div>
    </div>

    {result_section}
</div>
<script>
document.querySelectorAll('form.upload-form').forEach(function (form) {{
    form.addEventListener('submit', function () {{
        var btn = form.querySelector('button[type=submit]');
        btn.disabled = true;
        btn.innerHTML = '<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>'
            + '<span class="ms-2">' + btn.dataset.pending + '</span>';
    }});
}});
</script>
</body>
</html>"#,
        result_section = render_result_section(view),
    )
}

fn render_result_section(view: &PageView) -> String {
    if view.message.is_none() && view.anomalies.is_empty() {
        return String::new();
    }

    let alert = match &view.message {
        Some(message) => {
            let alert_class = if view.anomalies.is_empty() { "alert-info" } else { "alert-warning" };
            format!(
                r#"<div class="alert {} mt-3">{}</div>"#,
                alert_class,
                escape_html(message)
            )
        }
        None => String::new(),
    };

    let table = if view.anomalies.is_empty() {
        String::new()
    } else {
        // Shown verbatim and in full: no sorting, deduplication, or paging.
        let rows: String = view
            .anomalies
            .iter()
            .enumerate()
            .map(|(i, anomaly)| {
                format!(
                    r#"<tr><td>{}</td><td><code>{}</code></td></tr>"#,
                    i + 1,
                    escape_html(anomaly)
                )
            })
            .collect();
        format!(
            r#"
        <div class="mt-4">
            <h4>탐지된 비정상 로그 목록</h4>
            <table class="table table-striped table-hover">
                <thead class="table-dark">
                    <tr><th style="width: 5%">#</th><th>비정상 의심 요청</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>"#
        )
    };

    format!(
        r#"<div class="mt-5">
        <h2>처리 결과</h2>
        {alert}
        {table}
    </div>"#
    )
}

/// Anomalies are raw log lines, so metacharacters must not reach the markup.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
