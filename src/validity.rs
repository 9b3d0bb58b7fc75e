//! Validity dates of a certificate, derived from the audit date.
//!
//! Offsets are fixed day counts: one "year" is always 365 days, even when the
//! span crosses a 29 February. Issued certificates carry dates computed this
//! way, so the rule stays literal.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::{CertError, Result};

const YEAR_DAYS: u64 = 365;
const EIGHT_WEEKS_DAYS: u64 = 56;
const TWO_WEEKS_DAYS: u64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedValidity {
    pub expiry_date: NaiveDate,
    pub recert_window_start: NaiveDate,
    pub recert_window_end: NaiveDate,
}

impl ComputedValidity {
    pub fn from_audit_date(audit_date: NaiveDate) -> Result<Self> {
        let anniversary = add_days(audit_date, YEAR_DAYS)?;
        // audit + 1 year + 8 weeks - 1 day
        let expiry_date = add_days(anniversary, EIGHT_WEEKS_DAYS - 1)?;
        let recert_window_start = anniversary
            .checked_sub_days(Days::new(EIGHT_WEEKS_DAYS))
            .ok_or(CertError::DateOutOfRange)?;
        let recert_window_end = add_days(anniversary, TWO_WEEKS_DAYS)?;

        Ok(Self {
            expiry_date,
            recert_window_start,
            recert_window_end,
        })
    }

    /// The 365-day anniversary the recertification window is centred on.
    pub fn anniversary(&self) -> NaiveDate {
        // start is always representable, so is start + 56
        self.recert_window_start + Days::new(EIGHT_WEEKS_DAYS)
    }

    /// Whether a recertification audit on `date` keeps the certification
    /// continuous. Both ends of the window are included.
    pub fn window_contains(&self, date: NaiveDate) -> bool {
        self.recert_window_start <= date && date <= self.recert_window_end
    }
}

/// Computes the validity dates, failing when no audit date was given.
pub fn compute_validity(audit_date: Option<NaiveDate>) -> Result<ComputedValidity> {
    let audit_date = audit_date.ok_or(CertError::InvalidInput("audit date"))?;
    ComputedValidity::from_audit_date(audit_date)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(CertError::DateOutOfRange)
}
