use std::io::{self, Write};
use std::process;

use chrono::Local;
use log::warn;
use simple_logger::SimpleLogger;

use loan_repayment::calendar::default_holidays;
use loan_repayment::input;
use loan_repayment::loan::Schedule;
use loan_repayment::{build_schedule, LoanTerms, ScheduleError};

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ScheduleError> {
    let principal = prompt("Enter the loan amount: ", input::parse_principal);
    let annual_rate = prompt(
        "Enter the annual interest rate (percent): ",
        input::parse_annual_rate,
    );
    let term_months = prompt("Enter the loan term (months): ", input::parse_term_months);
    let method = prompt(
        "Choose the repayment method (1: equal installment, 2: bullet): ",
        input::parse_method,
    );

    let terms = LoanTerms::new(principal, annual_rate, term_months)?;
    let calendar = default_holidays()?;
    let schedule = build_schedule(&terms, method, Local::now().date_naive(), &calendar)?;
    present(&schedule);
    Ok(())
}

/// Prompts until the validator accepts a line of input.
fn prompt<T>(text: &str, parse: impl Fn(&str) -> Result<T, ScheduleError>) -> T {
    loop {
        print!("{text}");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            eprintln!("input ended before a value was supplied");
            process::exit(1);
        }
        match parse(&line) {
            Ok(value) => return value,
            Err(err) => warn!("{err}"),
        }
    }
}

fn present(schedule: &Schedule) {
    match &schedule.maturity {
        None => println!("\nFixed monthly payment: {:.2}", schedule.monthly_payment),
        Some(_) => println!("\nMonthly interest payment: {:.2}", schedule.monthly_payment),
    }

    println!("\nRepayment schedule:");
    println!(
        "{:<15}{:<10}{:<15}{:<15}{:<15}",
        "Date", "Month", "Interest", "Principal", "Balance"
    );
    for row in &schedule.rows {
        println!("{row}");
    }
    if let Some(lump) = &schedule.maturity {
        println!(
            "Principal due in full at maturity: {:.2} on {}",
            lump.amount, lump.date
        );
    }
}

// verifies that the public types implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    use loan_repayment::loan::{LumpSum, ScheduleRow};

    is_normal::<LoanTerms>();
    is_normal::<ScheduleRow>();
    is_normal::<Schedule>();
    is_normal::<LumpSum>();
    is_normal::<ScheduleError>();
}
