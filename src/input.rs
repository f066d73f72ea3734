//! Pure validation of raw terminal input, decoupled from the prompt loop.

use crate::error::ScheduleError;
use crate::loan::RepaymentMethod;

/// Loan amount: any positive decimal.
pub fn parse_principal(raw: &str) -> Result<f64, ScheduleError> {
    let amount = parse_number(raw)?;
    if !amount.is_finite() || amount <= 0. {
        return Err(ScheduleError::InvalidPrincipal(amount));
    }
    Ok(amount)
}

/// Annual rate as a percentage, 0 to 100 inclusive.
pub fn parse_annual_rate(raw: &str) -> Result<f64, ScheduleError> {
    let rate = parse_number(raw)?;
    if !(0. ..=100.).contains(&rate) {
        return Err(ScheduleError::InvalidRate(rate));
    }
    Ok(rate)
}

/// Term in whole months, at least one.
pub fn parse_term_months(raw: &str) -> Result<u32, ScheduleError> {
    let trimmed = raw.trim();
    let term: u32 = trimmed
        .parse()
        .map_err(|_| ScheduleError::InvalidNumber(trimmed.to_string()))?;
    if term < 1 {
        return Err(ScheduleError::InvalidTerm(term));
    }
    Ok(term)
}

/// Menu selector: `1` for equal installment, `2` for bullet.
pub fn parse_method(raw: &str) -> Result<RepaymentMethod, ScheduleError> {
    match raw.trim() {
        "1" => Ok(RepaymentMethod::EqualInstallment),
        "2" => Ok(RepaymentMethod::Bullet),
        other => Err(ScheduleError::UnknownMethod(other.to_string())),
    }
}

fn parse_number(raw: &str) -> Result<f64, ScheduleError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ScheduleError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_annual_rate, parse_method, parse_principal, parse_term_months};
    use crate::error::ScheduleError;
    use crate::loan::RepaymentMethod;
    use test_log::test;

    #[test]
    fn numbers_parse_with_surrounding_whitespace() {
        assert_eq!(parse_principal(" 10000000 \n").unwrap(), 10_000_000.);
        assert_eq!(parse_annual_rate("5.0\n").unwrap(), 5.);
        assert_eq!(parse_annual_rate("0").unwrap(), 0.);
        assert_eq!(parse_term_months(" 12\n").unwrap(), 12);
    }

    #[test]
    fn method_selector_accepts_only_the_menu_entries() {
        assert_eq!(parse_method("1\n").unwrap(), RepaymentMethod::EqualInstallment);
        assert_eq!(parse_method(" 2 ").unwrap(), RepaymentMethod::Bullet);
        assert!(matches!(
            parse_method("3"),
            Err(ScheduleError::UnknownMethod(_))
        ));
        assert!(matches!(
            parse_method("bullet"),
            Err(ScheduleError::UnknownMethod(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            parse_principal("0"),
            Err(ScheduleError::InvalidPrincipal(_))
        ));
        assert!(matches!(
            parse_principal("-5000"),
            Err(ScheduleError::InvalidPrincipal(_))
        ));
        assert!(matches!(
            parse_principal("inf"),
            Err(ScheduleError::InvalidPrincipal(_))
        ));
        assert!(matches!(
            parse_annual_rate("100.1"),
            Err(ScheduleError::InvalidRate(_))
        ));
        assert!(matches!(
            parse_annual_rate("-0.1"),
            Err(ScheduleError::InvalidRate(_))
        ));
        assert!(matches!(
            parse_term_months("0"),
            Err(ScheduleError::InvalidTerm(0))
        ));
    }

    #[test]
    fn unparseable_strings_are_rejected() {
        assert!(matches!(
            parse_principal("ten million"),
            Err(ScheduleError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_term_months("12.5"),
            Err(ScheduleError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_term_months(""),
            Err(ScheduleError::InvalidNumber(_))
        ));
    }
}
