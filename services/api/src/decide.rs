use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use loan_decision::decision::identifier::{generate, generate_in_segment, Sex};
use loan_decision::decision::policy::{segment_by_name, CreditSegment, CREDIT_SEGMENTS};
use loan_decision::decision::router::status_for;
use loan_decision::decision::{credit, DateSource, Decision, DecisionEngine, LoanRequest};
use loan_decision::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant personal code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount in euros
    #[arg(long)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long)]
    pub(crate) period: i32,
    /// Country code (EE, LV or LT)
    #[arg(long, default_value = "EE")]
    pub(crate) country: String,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the decision as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Birth date encoded in the code (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: NaiveDate,
    /// male or female
    #[arg(long, default_value = "male")]
    pub(crate) sex: Sex,
    /// Credit segment to target: debtor, segment1, segment2 or segment3
    #[arg(long, value_parser = parse_segment)]
    pub(crate) segment: Option<&'static CreditSegment>,
    /// Serial number (0-999), ignored when a segment is requested
    #[arg(long, default_value_t = 0)]
    pub(crate) serial: u16,
}

fn parse_segment(raw: &str) -> Result<&'static CreditSegment, String> {
    segment_by_name(raw).ok_or_else(|| {
        let known: Vec<&str> = CREDIT_SEGMENTS.iter().map(|segment| segment.name).collect();
        format!("unknown segment '{raw}', expected one of {}", known.join(", "))
    })
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        country,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = DecisionEngine::standard(DateSource::Fixed(today));
    let request = LoanRequest {
        personal_code,
        loan_amount: amount,
        loan_period: period,
        country_code: country,
    };

    let outcome = engine.evaluate(&request);
    let decision = Decision::from_outcome(&outcome);

    if json {
        let rendered = serde_json::to_string_pretty(&decision)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Loan decision (evaluated {today})");
    println!(
        "Request: {} EUR over {} months, country {}",
        request.loan_amount, request.loan_period, request.country_code
    );
    match &outcome {
        Ok(loan) => {
            let modifier = credit::resolve(&request.personal_code);
            println!("Credit modifier: {}", modifier.0);
            println!("Approved: {} EUR over {} months", loan.amount, loan.period);
        }
        Err(err) => {
            println!(
                "Rejected ({}): {}",
                status_for(err).as_u16(),
                decision.error_message().unwrap_or_default()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        birth_date,
        sex,
        segment,
        serial,
    } = args;

    let code = match segment {
        Some(segment) => generate_in_segment(birth_date, sex, segment)?,
        None => generate(birth_date, sex, serial)?,
    };

    println!("{code}");
    Ok(())
}
