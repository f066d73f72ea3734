use chrono::NaiveDate;
use thiserror::Error;

/// Failures from parameter validation, holiday-calendar construction, and
/// schedule generation. All are terminal for the current call.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum ScheduleError {
    #[error("loan amount must be positive, got {0}")]
    InvalidPrincipal(f64),

    #[error("annual rate must be between 0 and 100 percent, got {0}")]
    InvalidRate(f64),

    #[error("loan term must be at least one month, got {0}")]
    InvalidTerm(u32),

    #[error("unrecognized repayment method {0:?}, expected 1 or 2")]
    UnknownMethod(String),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid holiday date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("date arithmetic left the calendar range near {0}")]
    DateOverflow(NaiveDate),
}
