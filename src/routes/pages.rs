use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use std::sync::Arc;
use tera::Context;

use super::ValidityDisplay;
use crate::error::CertError;
use crate::form::CertificateForm;
use crate::state::AppState;
use crate::templates::{get_tera, INDEX_PAGE};
use crate::validity::compute_validity;

const INCOMPLETE_WARNING: &str =
    "Veuillez remplir tous les champs obligatoires pour générer le certificat.";

pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render_page(&state, &CertificateForm::with_defaults())
}

pub async fn preview(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CertificateForm>,
) -> impl IntoResponse {
    render_page(&state, &form)
}

fn render_page(state: &AppState, form: &CertificateForm) -> Html<String> {
    let mut ctx = Context::new();
    ctx.insert("form", form);
    ctx.insert("issuer_name", &state.assembler.issuer().brand_name);

    let validity = form
        .audit_date()
        .ok()
        .flatten()
        .and_then(|date| compute_validity(Some(date)).ok());
    ctx.insert("validity", &validity.as_ref().map(ValidityDisplay::from));

    let mut certificate_html: Option<String> = None;
    let mut warning = String::new();
    let mut missing_fields: Vec<&'static str> = Vec::new();

    match form.clone().into_request() {
        Ok(request) => match validity {
            Some(validity) => match state.assembler.render_certificate(&request, &validity) {
                Ok(doc) => certificate_html = Some(doc.into_string()),
                Err(e) => {
                    tracing::error!("Failed to render certificate: {}", e);
                    warning = e.to_string();
                }
            },
            None => warning = CertError::DateOutOfRange.to_string(),
        },
        Err(CertError::MissingFields(fields)) => {
            tracing::warn!("Incomplete certificate form: {}", fields.join(", "));
            warning = INCOMPLETE_WARNING.to_string();
            missing_fields = fields;
        }
        Err(e) => {
            tracing::warn!("Rejected certificate form: {}", e);
            warning = e.to_string();
        }
    }

    ctx.insert("certificate_html", &certificate_html);
    ctx.insert("warning", &warning);
    ctx.insert("missing_fields", &missing_fields);

    let rendered = get_tera()
        .and_then(|tera| tera.render(INDEX_PAGE, &ctx))
        .unwrap_or_else(|e| {
            tracing::error!("Template error in {}: {}", INDEX_PAGE, e);
            format!("Template error: {}", INDEX_PAGE)
        });
    Html(rendered)
}
