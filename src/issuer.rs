//! Boilerplate of the issuing control body, printed on every certificate.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CertError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerProfile {
    /// Form reference printed in the top-left corner.
    pub document_reference: String,
    /// Legal identity lines, shown in the header and repeated in the footer.
    pub identity_lines: Vec<String>,
    pub brand_tagline: String,
    pub brand_name: String,
    pub title_lines: Vec<String>,
    pub attestation: String,
    pub conformity_statement: String,
    pub signatory_name: String,
    pub signatory_title_lines: Vec<String>,
    pub disclaimer: String,
}

impl Default for IssuerProfile {
    fn default() -> Self {
        Self {
            document_reference: "F-HACCP-04".to_string(),
            identity_lines: vec![
                "ECOCERT Environnement SAS – Capital 37.000 € – 36 Boulevard de la Bastille, 75012 Paris".to_string(),
                "SIREN 409 982 709 RCS PARIS - Tél. +33 (0)1 53 44 74 44– www.ecocert.com".to_string(),
            ],
            brand_tagline: "ENVIRONNEMENT 🌿".to_string(),
            brand_name: "ECOCERT".to_string(),
            title_lines: vec![
                "CERTIFICATE OF CONFORMITY".to_string(),
                "HACCP".to_string(),
            ],
            attestation:
                "By this letter, Ecocert Environnement SAS, as a Control Body, certifies that:"
                    .to_string(),
            conformity_statement: "Comply with the recommendations described in the Codex Alimentarius GENERAL PRINCIPLES \n                OF FOOD HYGIENE Guide, No. CAC/RCP 1-1969, Rev. 6 (2022) according to the program \n                requirements defined by Ecocert in the F-HACCP-01 audit checklist and the C-HACCP-01 audit \n                process.".to_string(),
            signatory_name: "Nicolas BESCOND".to_string(),
            signatory_title_lines: vec![
                "Head of Department".to_string(),
                "Food Quality and Safety".to_string(),
            ],
            disclaimer: "This document is the property of Ecocert Environnement SAS. It must be returned on request. Only the signed original is valid.".to_string(),
        }
    }
}

impl IssuerProfile {
    /// Loads a profile from JSON. Keys left out keep their default text.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CertError::IssuerProfile(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| CertError::IssuerProfile(format!("{}: {}", path.display(), e)))
    }
}
