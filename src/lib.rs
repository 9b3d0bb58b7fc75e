//! HACCP certificate of conformity generator.
//!
//! [`validity`] derives the expiry date and recertification window from an
//! audit date, [`document`] renders the certificate and its standalone HTML
//! page. [`routes`] serves the form that collects the fields.

pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod format;
pub mod issuer;
pub mod routes;
pub mod state;
pub mod templates;
pub mod validity;

pub use document::{
    render_certificate, render_standalone, suggested_file_name, CertificateAssembler,
    CertificateDocument, CertificateRequest, DOCUMENT_MIME_TYPE,
};
pub use error::{CertError, Result};
pub use form::CertificateForm;
pub use format::{format_date, format_date_as, DateFormat};
pub use issuer::IssuerProfile;
pub use validity::{compute_validity, ComputedValidity};
