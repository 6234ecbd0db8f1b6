use crate::errors::AppError;
use crate::models::{ChartDataResponse, DataResponse, RawDataResponse};
use crate::normalize::normalize_records;
use crate::state::AppState;
use crate::stats::build_totals;
use crate::ui::render_index;
use crate::upstream::UpstreamFile;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, info};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<RawDataResponse>) {
    match forward_data(&state, &body).await {
        Ok(data) => (StatusCode::OK, Json(DataResponse::ok(data))),
        Err(err) => {
            error!("webhook error: {err}");
            (err.status, Json(DataResponse::failure(err.message)))
        }
    }
}

pub async fn chart_data(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ChartDataResponse>) {
    match forward_data(&state, &body).await {
        Ok(raw) => {
            let records = normalize_records(&raw);
            let totals = build_totals(&records);
            info!(records = records.len(), "normalized chart data");
            (StatusCode::OK, Json(DataResponse::ok(records).with_totals(totals)))
        }
        Err(err) => {
            error!("chart data error: {err}");
            (err.status, Json(DataResponse::failure(err.message)))
        }
    }
}

pub async fn prompt_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let file = forward_prompt(&state, &body).await.inspect_err(|err| {
        error!("prompt webhook error: {err}");
    })?;
    info!(
        content_type = ?file.content_type,
        bytes = file.body.len(),
        "relaying prompt artifact"
    );
    Ok(([(CONTENT_TYPE, file.content_type)], file.body).into_response())
}

async fn forward_data(state: &AppState, body: &[u8]) -> Result<Value, AppError> {
    let payload = parse_body(body)?;
    state
        .client
        .fetch_json(&state.config.data_webhook_url, &payload)
        .await
}

async fn forward_prompt(state: &AppState, body: &[u8]) -> Result<UpstreamFile, AppError> {
    let payload = parse_body(body)?;
    state
        .client
        .fetch_file(&state.config.prompt_webhook_url, &payload)
        .await
}

fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    Ok(serde_json::from_slice(body)?)
}
