mod api;
mod pages;

pub use api::{download_certificate, validity_json};
pub use pages::{index, preview};

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::format::format_date;
use crate::state::AppState;
use crate::validity::ComputedValidity;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/preview", post(preview))
        .route("/api/validity", post(validity_json))
        .route("/download", post(download_certificate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Computed dates as shown to the user.
#[derive(Debug, Serialize)]
pub struct ValidityDisplay {
    pub expiry_date: String,
    pub recert_window_start: String,
    pub recert_window_end: String,
}

impl From<&ComputedValidity> for ValidityDisplay {
    fn from(v: &ComputedValidity) -> Self {
        Self {
            expiry_date: format_date(Some(v.expiry_date)),
            recert_window_start: format_date(Some(v.recert_window_start)),
            recert_window_end: format_date(Some(v.recert_window_end)),
        }
    }
}
