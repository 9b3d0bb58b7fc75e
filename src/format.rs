use chrono::NaiveDate;

const DATE_PATTERN: &str = "%d/%m/%Y";
const LINE_BREAK: &str = "<br>";

/// Where a date is displayed. Both modes print `dd/mm/yyyy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// Form side panels (French locale).
    #[default]
    Local,
    /// Certificate body.
    Certificate,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Local | DateFormat::Certificate => DATE_PATTERN,
        }
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    format_date_as(date, DateFormat::Local)
}

pub fn format_date_as(date: Option<NaiveDate>, format: DateFormat) -> String {
    match date {
        Some(date) => date.format(format.pattern()).to_string(),
        None => "-".to_string(),
    }
}

/// Turns newlines into document line breaks. Everything else is kept as is.
pub fn multiline_markup(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}
