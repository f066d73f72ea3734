use chrono::{Months, NaiveDate};
use log::trace;
use std::fmt;

use crate::calendar::HolidayCalendar;
use crate::error::ScheduleError;

/// How the principal comes back to the lender.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RepaymentMethod {
    /// Fixed total payment every month; the interest/principal split
    /// shifts toward principal over the term.
    EqualInstallment,
    /// Interest-only months, with the principal due in full one month
    /// past the last interest payment.
    Bullet,
}

impl fmt::Display for RepaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepaymentMethod::EqualInstallment => write!(f, "equal installment"),
            RepaymentMethod::Bullet => write!(f, "bullet"),
        }
    }
}

/// Validated loan parameters. Construct through [`LoanTerms::new`]; the
/// schedule builder assumes the checks have already run and does not
/// re-validate.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoanTerms {
    principal: f64,
    annual_rate: f64,
    term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate: f64, term_months: u32) -> Result<Self, ScheduleError> {
        if !principal.is_finite() || principal <= 0. {
            return Err(ScheduleError::InvalidPrincipal(principal));
        }
        if !(0. ..=100.).contains(&annual_rate) {
            return Err(ScheduleError::InvalidRate(annual_rate));
        }
        if term_months < 1 {
            return Err(ScheduleError::InvalidTerm(term_months));
        }
        Ok(Self {
            principal,
            annual_rate,
            term_months,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Annual percentage converted to the monthly decimal rate.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100. / 12.
    }
}

/// One scheduled payment. Amounts carry full precision; rounding to cents
/// happens at presentation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleRow {
    pub period: u32,
    pub date: NaiveDate,
    pub interest: f64,
    pub principal_portion: f64,
    pub balance: f64,
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15}{:<10}{:<15.2}{:<15.2}{:<15.2}",
            self.date.to_string(),
            self.period,
            self.interest,
            self.principal_portion,
            self.balance
        )
    }
}

/// The bullet method's terminal principal repayment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LumpSum {
    pub date: NaiveDate,
    pub amount: f64,
}

/// An ordered repayment schedule. `monthly_payment` is the fixed payment
/// for the equal-installment method and the constant interest charge for
/// the bullet method; `maturity` is present only for bullet loans.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    pub monthly_payment: f64,
    pub rows: Vec<ScheduleRow>,
    pub maturity: Option<LumpSum>,
}

/// Fixed monthly payment for an equal-installment loan:
/// M = P * r * (1+r)^n / ((1+r)^n - 1). The closed form divides by zero
/// at r = 0, where the payment is straight division of the principal.
pub fn monthly_payment(terms: &LoanTerms) -> f64 {
    let rate = terms.monthly_rate();
    if rate == 0. {
        return terms.principal() / f64::from(terms.term_months());
    }
    let factor = (1. + rate).powf(f64::from(terms.term_months()));
    terms.principal() * rate * factor / (factor - 1.)
}

/// Builds the repayment schedule for validated terms. The date of period
/// k is the start date advanced by k calendar months (day-of-month
/// clamped) and then pushed to the next business day. The bullet maturity
/// date one month past the final period is left unadjusted.
pub fn build_schedule(
    terms: &LoanTerms,
    method: RepaymentMethod,
    start_date: NaiveDate,
    calendar: &HolidayCalendar,
) -> Result<Schedule, ScheduleError> {
    match method {
        RepaymentMethod::EqualInstallment => equal_installment_schedule(terms, start_date, calendar),
        RepaymentMethod::Bullet => bullet_schedule(terms, start_date, calendar),
    }
}

fn period_date(start_date: NaiveDate, months_ahead: u32) -> Result<NaiveDate, ScheduleError> {
    start_date
        .checked_add_months(Months::new(months_ahead))
        .ok_or(ScheduleError::DateOverflow(start_date))
}

fn equal_installment_schedule(
    terms: &LoanTerms,
    start_date: NaiveDate,
    calendar: &HolidayCalendar,
) -> Result<Schedule, ScheduleError> {
    let rate = terms.monthly_rate();
    let payment = monthly_payment(terms);
    let mut balance = terms.principal();
    let mut rows = Vec::new();

    for period in 1..=terms.term_months() {
        let date = calendar.next_business_day(period_date(start_date, period)?)?;
        let interest = balance * rate;
        let mut principal_portion = payment - interest;
        if principal_portion >= balance {
            // final rounding row: the payment shrinks to what is owed
            principal_portion = balance;
            balance = 0.;
        } else {
            balance -= principal_portion;
        }
        trace!(
            "period {}, date {}, interest {}, balance {}",
            period,
            date,
            interest,
            balance
        );
        rows.push(ScheduleRow {
            period,
            date,
            interest,
            principal_portion,
            balance,
        });
        if balance <= 0. {
            break;
        }
    }

    Ok(Schedule {
        monthly_payment: payment,
        rows,
        maturity: None,
    })
}

fn bullet_schedule(
    terms: &LoanTerms,
    start_date: NaiveDate,
    calendar: &HolidayCalendar,
) -> Result<Schedule, ScheduleError> {
    let interest = terms.principal() * terms.monthly_rate();
    let mut rows = Vec::new();

    for period in 1..=terms.term_months() {
        let date = calendar.next_business_day(period_date(start_date, period)?)?;
        rows.push(ScheduleRow {
            period,
            date,
            interest,
            principal_portion: 0.,
            balance: terms.principal(),
        });
    }

    // the maturity date is contractual and stays where it falls, even on
    // a weekend or holiday
    let maturity_date = period_date(start_date, terms.term_months().saturating_add(1))?;
    Ok(Schedule {
        monthly_payment: interest,
        rows,
        maturity: Some(LumpSum {
            date: maturity_date,
            amount: terms.principal(),
        }),
    })
}
