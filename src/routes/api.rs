use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::ValidityDisplay;
use crate::document::{suggested_file_name, DOCUMENT_MIME_TYPE};
use crate::form::{parse_date_field, CertificateForm};
use crate::state::AppState;
use crate::validity::compute_validity;

#[derive(Debug, Deserialize)]
pub struct ValidityQuery {
    #[serde(default)]
    audit_date: Option<String>,
}

pub async fn validity_json(Json(query): Json<ValidityQuery>) -> impl IntoResponse {
    let audit_date = match parse_date_field("audit_date", query.audit_date.as_deref().unwrap_or("")) {
        Ok(date) => date,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    };

    match compute_validity(audit_date) {
        Ok(validity) => Json(ValidityDisplay::from(&validity)).into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn download_certificate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CertificateForm>,
) -> impl IntoResponse {
    let request = match form.into_request() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Download refused: {}", e);
            return Redirect::to("/").into_response();
        }
    };

    let document = compute_validity(Some(request.audit_date))
        .and_then(|validity| state.assembler.render_standalone(&request, &validity));
    let document = match document {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to build certificate {}: {}", request.certificate_number, e);
            return Redirect::to("/").into_response();
        }
    };

    let filename = suggested_file_name(&request);
    let mime = mime_guess::from_path(&filename)
        .first_raw()
        .unwrap_or(DOCUMENT_MIME_TYPE);
    tracing::info!("Serving certificate {} as {}", request.certificate_number, filename);

    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        document.into_string(),
    )
        .into_response()
}
