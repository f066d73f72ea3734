//! Loan repayment schedules: equal-installment and bullet repayment with
//! payment dates rolled forward past weekends and holidays.

pub mod calendar;
pub mod error;
pub mod input;
pub mod loan;

pub use calendar::HolidayCalendar;
pub use error::ScheduleError;
pub use loan::{build_schedule, monthly_payment, LoanTerms, RepaymentMethod, Schedule, ScheduleRow};
