//! Invoice printing and preview handlers.
//!
//! Bodies are the `{ ok, data }` envelope. Errors come back as
//! `{ "badMessage": "..." }` with 400 for bad input and 500 for delivery or
//! internal failures.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::TicketError;
use crate::invoice::PrintRequest;

use super::super::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadRequestResponse {
    pub bad_message: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct HtmlPreviewResponse {
    pub html: String,
}

/// Handle POST /api/printing/invoice - render and deliver.
pub async fn print(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PrintRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.service.print_invoice(&request).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e, "Print failed"),
    }
}

/// Handle POST /api/printing/invoice/preview - plain-text ticket.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PrintRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.service.preview_text(&request) {
        Ok(preview) => Json(PreviewResponse { preview }).into_response(),
        Err(e) => error_response(&e, "Preview failed"),
    }
}

/// Handle POST /api/printing/invoice/preview/html - HTML wrapped in JSON.
pub async fn preview_html(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PrintRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.service.preview_html(&request) {
        Ok(html) => Json(HtmlPreviewResponse { html }).into_response(),
        Err(e) => error_response(&e, "HTML preview failed"),
    }
}

/// Handle POST /api/printing/invoice/render - HTML page.
pub async fn render(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PrintRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.service.preview_html(&request) {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_response(&e, "Render failed"),
    }
}

/// Handle GET /api/printing/status - current delivery configuration.
pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(state.service.status()),
    )
        .into_response()
}

fn error_response(err: &TicketError, context: &str) -> Response {
    let (status, bad_message) = if err.is_client_error() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}: {}", context, err),
        )
    };
    (status, Json(BadRequestResponse { bad_message })).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(BadRequestResponse {
            bad_message: rejection.body_text(),
        }),
    )
        .into_response()
}
