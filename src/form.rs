use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::document::CertificateRequest;
use crate::error::{CertError, Result};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw form submission. Dates arrive as `YYYY-MM-DD` strings from
/// `<input type="date">`; empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateForm {
    pub company_name: String,
    pub address: String,
    pub audit_scope: String,
    pub audit_date: String,
    pub issue_date: String,
    pub certificate_number: String,
}

impl CertificateForm {
    /// The pre-filled form shown on first visit. Issue date is today.
    pub fn with_defaults() -> Self {
        Self {
            company_name: "JUICING EXPERTS SAC".to_string(),
            address: "CENTRO INDUSTRIAL\nLAS PRADERAS DE LURIN\nMZ A LT 14-LURIN\nLIMA-PERÚ"
                .to_string(),
            audit_scope: "Pasteurized and frozen juices of ginger, turmeric, pineapple,\nlemon & passion fruit and by-products (starch and sediments of ginger and\nturmeric)\npacked in bulk and in polythene bags and in buckets or cylinders".to_string(),
            audit_date: "2025-01-21".to_string(),
            issue_date: Local::now().date_naive().format(DATE_INPUT_FORMAT).to_string(),
            certificate_number: "25HACCP001".to_string(),
        }
    }

    pub fn audit_date(&self) -> Result<Option<NaiveDate>> {
        parse_date_field("audit_date", &self.audit_date)
    }

    pub fn issue_date(&self) -> Result<Option<NaiveDate>> {
        parse_date_field("issue_date", &self.issue_date)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("company_name", &self.company_name),
            ("address", &self.address),
            ("audit_scope", &self.audit_scope),
            ("audit_date", &self.audit_date),
            ("issue_date", &self.issue_date),
            ("certificate_number", &self.certificate_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Presence check and date parsing. Text is passed through untouched.
    pub fn into_request(self) -> Result<CertificateRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CertError::MissingFields(missing));
        }
        let audit_date = self
            .audit_date()?
            .ok_or(CertError::InvalidInput("audit date"))?;
        let issue_date = self
            .issue_date()?
            .ok_or(CertError::InvalidInput("issue date"))?;

        Ok(CertificateRequest {
            company_name: self.company_name,
            address: self.address,
            audit_scope: self.audit_scope,
            audit_date,
            issue_date,
            certificate_number: self.certificate_number,
        })
    }
}

pub fn parse_date_field(field: &'static str, value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| CertError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CertificateForm {
        CertificateForm {
            company_name: "ACME SAC".to_string(),
            address: "ST 1\nCITY".to_string(),
            audit_scope: "Juice processing".to_string(),
            audit_date: "2025-01-21".to_string(),
            issue_date: "2025-03-01".to_string(),
            certificate_number: "25HACCP001".to_string(),
        }
    }

    #[test]
    fn complete_form_becomes_a_request() {
        let request = filled().into_request().unwrap();
        assert_eq!(request.company_name, "ACME SAC");
        assert_eq!(request.address, "ST 1\nCITY");
        assert_eq!(request.audit_date, NaiveDate::from_ymd_opt(2025, 1, 21).unwrap());
        assert_eq!(request.issue_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn empty_fields_are_listed() {
        let form = CertificateForm {
            address: String::new(),
            certificate_number: String::new(),
            ..filled()
        };
        match form.into_request() {
            Err(CertError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["address", "certificate_number"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = CertificateForm {
            audit_date: "21/01/2025".to_string(),
            ..filled()
        };
        let err = form.into_request().unwrap_err();
        assert!(matches!(err, CertError::InvalidDate { field: "audit_date", .. }));
    }

    #[test]
    fn blank_date_parses_to_none() {
        assert_eq!(parse_date_field("audit_date", "  ").unwrap(), None);
    }

    #[test]
    fn defaults_are_complete() {
        let form = CertificateForm::with_defaults();
        assert!(form.missing_fields().is_empty());
        let request = form.into_request().unwrap();
        assert_eq!(request.certificate_number, "25HACCP001");
        assert_eq!(request.audit_date, NaiveDate::from_ymd_opt(2025, 1, 21).unwrap());
    }
}
