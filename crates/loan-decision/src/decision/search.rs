use tracing::debug;

use super::domain::{ApprovedLoan, CreditModifier};
use super::error::DecisionError;
use super::policy::{MAX_LOAN_AMOUNT, MAX_LOAN_PERIOD, MIN_LOAN_AMOUNT};

/// Largest loan the modifier supports, extending the period until the minimum amount is met.
///
/// The requested amount does not cap the result: applicants are offered the most they qualify
/// for, which may be more or less than they asked for.
pub fn find_approval(
    modifier: CreditModifier,
    requested_amount: i64,
    requested_period: i32,
) -> Result<ApprovedLoan, DecisionError> {
    if modifier.is_debtor() {
        return Err(DecisionError::NoValidLoan);
    }

    let mut period = requested_period;
    while period <= MAX_LOAN_PERIOD && modifier.max_amount(period) < MIN_LOAN_AMOUNT {
        period += 1;
    }

    if period > MAX_LOAN_PERIOD {
        return Err(DecisionError::NoValidLoan);
    }

    let amount = MAX_LOAN_AMOUNT.min(modifier.max_amount(period));
    debug!(
        modifier = modifier.0,
        requested_amount,
        requested_period,
        amount,
        period,
        "loan amount search converged"
    );

    Ok(ApprovedLoan { amount, period })
}
