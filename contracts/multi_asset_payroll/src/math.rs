//! Fixed-point payroll arithmetic.
//!
//! Everything here is integer math on plain values so it can be shared by the
//! contract and by off-chain tooling. Operations multiply before they divide
//! and truncate toward zero.

use crate::errors::PayrollError;

/// Scale of exchange rates: base-currency units per asset unit * 10^18.
pub const RATE_PRECISION: i128 = 1_000_000_000_000_000_000;

pub const MONTHS_PER_YEAR: i128 = 12;

pub const DAYS_PER_MONTH: i128 = 30;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Minimum time between two paydays unless the owner configures another one.
pub const DEFAULT_PAY_INTERVAL: u64 = 30 * SECONDS_PER_DAY;

/// Percentages of an allocation must add up to exactly this value.
pub const PERCENT_TOTAL: u32 = 100;

pub const MAX_ALLOCATION_ASSETS: u32 = 10;

/// Upper bound of the treasury's tracked asset list.
pub const MAX_TRACKED_ASSETS: u32 = 20;

/// Runway reported when there is nothing to pay.
pub const RUNWAY_UNBOUNDED: u64 = u64::MAX;

/// Monthly salary derived from a yearly one, floor division.
///
/// `200_000` per year is `16_666` per month.
pub fn monthly_salary(yearly_salary: i128) -> Result<i128, PayrollError> {
    if yearly_salary < 0 {
        return Err(PayrollError::InvalidSalary);
    }
    Ok(yearly_salary / MONTHS_PER_YEAR)
}

/// Part of `gross` owed in an asset allocated `percentage` percent.
pub fn base_share(gross: i128, percentage: u32) -> Result<i128, PayrollError> {
    gross
        .checked_mul(i128::from(percentage))
        .map(|scaled| scaled / i128::from(PERCENT_TOTAL))
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Converts a base-currency amount into asset units at `rate`.
///
/// A zero (missing) rate can never be used for settlement.
pub fn asset_amount(base_amount: i128, rate: i128) -> Result<i128, PayrollError> {
    if rate <= 0 {
        return Err(PayrollError::RateUnavailable);
    }
    base_amount
        .checked_mul(RATE_PRECISION)
        .map(|scaled| scaled / rate)
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Converts asset units back into base currency at `rate`.
pub fn base_value(asset_amount: i128, rate: i128) -> Result<i128, PayrollError> {
    if rate <= 0 {
        return Err(PayrollError::RateUnavailable);
    }
    asset_amount
        .checked_mul(rate)
        .map(|scaled| scaled / RATE_PRECISION)
        .ok_or(PayrollError::ArithmeticOverflow)
}

/// Days the treasury can sustain `monthly_burn` with `balance`.
///
/// Returns [`RUNWAY_UNBOUNDED`] when nothing is owed.
pub fn runway_days(balance: i128, monthly_burn: i128) -> u64 {
    if monthly_burn <= 0 {
        return RUNWAY_UNBOUNDED;
    }
    if balance <= 0 {
        return 0;
    }
    let days = match balance.checked_mul(DAYS_PER_MONTH) {
        Some(scaled) => scaled / monthly_burn,
        None => (balance / monthly_burn).saturating_mul(DAYS_PER_MONTH),
    };
    u64::try_from(days).unwrap_or(RUNWAY_UNBOUNDED)
}

/// Checks the percentage half of an allocation.
pub fn check_percentages<I>(percentages: I) -> Result<(), PayrollError>
where
    I: IntoIterator<Item = u32>,
{
    let mut count: u32 = 0;
    let mut total: u32 = 0;
    for percentage in percentages {
        count += 1;
        if count > MAX_ALLOCATION_ASSETS {
            return Err(PayrollError::InvalidAllocation);
        }
        total = total
            .checked_add(percentage)
            .ok_or(PayrollError::InvalidAllocation)?;
    }
    if count == 0 || total != PERCENT_TOTAL {
        return Err(PayrollError::InvalidAllocation);
    }
    Ok(())
}

/// Earliest timestamp at which a payday counted from `reference` is allowed.
///
/// Strictly more than `interval` seconds must have elapsed.
pub fn next_payday_at(reference: u64, interval: u64) -> u64 {
    reference.saturating_add(interval).saturating_add(1)
}

pub fn is_payday_due(reference: u64, now: u64, interval: u64) -> bool {
    now >= next_payday_at(reference, interval)
}
