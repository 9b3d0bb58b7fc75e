//! Certificate assembly: fills the certificate template with the request
//! fields, the computed dates and the issuer boilerplate.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tera::Context;

use crate::error::Result;
use crate::format::{format_date_as, multiline_markup, DateFormat};
use crate::issuer::IssuerProfile;
use crate::templates::{get_tera, CERTIFICATE_BODY, CERTIFICATE_STANDALONE};
use crate::validity::ComputedValidity;

pub const DOCUMENT_MIME_TYPE: &str = "text/html";

/// A fully populated certificate request. Presence of every field is checked
/// by the caller before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequest {
    pub company_name: String,
    pub address: String,
    pub audit_scope: String,
    pub audit_date: NaiveDate,
    pub issue_date: NaiveDate,
    pub certificate_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument(String);

impl CertificateDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CertificateDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize)]
struct CertificateView<'a> {
    company_name: &'a str,
    address: String,
    audit_scope: String,
    certificate_number: &'a str,
    audit_date: String,
    issue_date: String,
    expiry_date: String,
    recert_window_start: String,
    recert_window_end: String,
    issuer: &'a IssuerProfile,
}

impl<'a> CertificateView<'a> {
    fn new(
        request: &'a CertificateRequest,
        validity: &ComputedValidity,
        issuer: &'a IssuerProfile,
    ) -> Self {
        let date = |d: NaiveDate| format_date_as(Some(d), DateFormat::Certificate);
        Self {
            company_name: &request.company_name,
            address: multiline_markup(&request.address),
            audit_scope: multiline_markup(&request.audit_scope),
            certificate_number: &request.certificate_number,
            audit_date: date(request.audit_date),
            issue_date: date(request.issue_date),
            expiry_date: date(validity.expiry_date),
            recert_window_start: date(validity.recert_window_start),
            recert_window_end: date(validity.recert_window_end),
            issuer,
        }
    }
}

/// Renders certificates on behalf of one issuer.
#[derive(Debug, Clone, Default)]
pub struct CertificateAssembler {
    issuer: IssuerProfile,
}

impl CertificateAssembler {
    pub fn new(issuer: IssuerProfile) -> Self {
        Self { issuer }
    }

    pub fn issuer(&self) -> &IssuerProfile {
        &self.issuer
    }

    pub fn render_certificate(
        &self,
        request: &CertificateRequest,
        validity: &ComputedValidity,
    ) -> Result<CertificateDocument> {
        let view = CertificateView::new(request, validity, &self.issuer);
        let ctx = Context::from_serialize(&view)?;
        let body = get_tera()?.render(CERTIFICATE_BODY, &ctx)?;
        Ok(CertificateDocument(body))
    }

    /// Wraps an already rendered body into a printable HTML page.
    pub fn wrap_standalone(
        &self,
        request: &CertificateRequest,
        body: &CertificateDocument,
    ) -> Result<CertificateDocument> {
        let mut ctx = Context::new();
        ctx.insert("title", &format!("Certificat HACCP - {}", request.company_name));
        ctx.insert("body", body.as_str());
        let page = get_tera()?.render(CERTIFICATE_STANDALONE, &ctx)?;
        Ok(CertificateDocument(page))
    }

    pub fn render_standalone(
        &self,
        request: &CertificateRequest,
        validity: &ComputedValidity,
    ) -> Result<CertificateDocument> {
        let body = self.render_certificate(request, validity)?;
        self.wrap_standalone(request, &body)
    }
}

pub fn render_certificate(
    request: &CertificateRequest,
    validity: &ComputedValidity,
) -> Result<CertificateDocument> {
    CertificateAssembler::default().render_certificate(request, validity)
}

pub fn render_standalone(
    request: &CertificateRequest,
    validity: &ComputedValidity,
) -> Result<CertificateDocument> {
    CertificateAssembler::default().render_standalone(request, validity)
}

pub fn suggested_file_name(request: &CertificateRequest) -> String {
    format!(
        "Certificat_HACCP_{}_{}.html",
        request.certificate_number,
        request.company_name.replace(' ', "_").replace('/', "_")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validity::compute_validity;

    fn acme() -> CertificateRequest {
        CertificateRequest {
            company_name: "ACME SAC".to_string(),
            address: "ST 1\nCITY".to_string(),
            audit_scope: "Juice processing".to_string(),
            audit_date: NaiveDate::from_ymd_opt(2025, 1, 21).unwrap(),
            issue_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            certificate_number: "25HACCP001".to_string(),
        }
    }

    #[test]
    fn renders_request_fields_and_dates() {
        let request = acme();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let doc = render_certificate(&request, &validity).unwrap();
        let html = doc.as_str();

        assert!(html.contains("ACME SAC"));
        assert!(html.contains("25HACCP001"));
        assert!(html.contains("ST 1<br>CITY"));
        assert!(html.contains("<strong>Audit Date:</strong> 21/01/2025"));
        assert!(html.contains("<strong>Date of issue:</strong> 01/03/2025"));
        assert!(html.contains("<strong>End date of validity:</strong> 17/03/2026"));
        assert!(html.contains("26/11/2025 – 04/02/2026"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let request = acme();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let first = render_certificate(&request, &validity).unwrap();
        let second = render_certificate(&request, &validity).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fields_are_not_escaped_or_trimmed() {
        let mut request = acme();
        request.company_name = "Fish & Chips <Ltd>".to_string();
        request.audit_scope = "  frozen\n\n chilled ".to_string();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let html = render_certificate(&request, &validity).unwrap().into_string();

        assert!(html.contains("Fish & Chips <Ltd>"));
        assert!(html.contains("  frozen<br><br> chilled "));
    }

    #[test]
    fn default_boilerplate_is_present() {
        let request = acme();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let html = render_certificate(&request, &validity).unwrap().into_string();

        assert!(html.contains("F-HACCP-04"));
        assert!(html.contains("CERTIFICATE OF CONFORMITY<br>HACCP"));
        assert!(html.contains("<strong>Nicolas BESCOND</strong><br>"));
        assert!(html.contains("Food Quality and Safety"));
        assert!(html.contains("Only the signed original is valid."));
        assert_eq!(html.matches("SIREN 409 982 709 RCS PARIS").count(), 2);
    }

    #[test]
    fn custom_issuer_replaces_boilerplate() {
        let issuer = IssuerProfile {
            signatory_name: "Jane DOE".to_string(),
            brand_name: "ACME CERT".to_string(),
            ..IssuerProfile::default()
        };
        let assembler = CertificateAssembler::new(issuer);
        let request = acme();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let html = assembler
            .render_certificate(&request, &validity)
            .unwrap()
            .into_string();

        assert!(html.contains("<strong>Jane DOE</strong>"));
        assert!(html.contains("ACME CERT"));
        assert!(!html.contains("Nicolas BESCOND"));
    }

    #[test]
    fn standalone_wraps_the_body() {
        let request = acme();
        let validity = compute_validity(Some(request.audit_date)).unwrap();
        let body = render_certificate(&request, &validity).unwrap();
        let page = render_standalone(&request, &validity).unwrap();
        let page = page.as_str();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Certificat HACCP - ACME SAC</title>"));
        assert!(page.contains("@media print"));
        assert!(page.contains(body.as_str()));
    }

    #[test]
    fn file_name_replaces_spaces_and_slashes() {
        let mut request = acme();
        request.company_name = "A/B FOODS SAC".to_string();
        assert_eq!(
            suggested_file_name(&request),
            "Certificat_HACCP_25HACCP001_A_B_FOODS_SAC.html"
        );
        assert_eq!(
            mime_guess::from_path(suggested_file_name(&request)).first_raw(),
            Some(DOCUMENT_MIME_TYPE)
        );
    }
}
