//! Off-chain payroll planning over a configured roster.
//!
//! Runs the contract's own arithmetic so that a preview here matches what a
//! payday on chain would transfer.

use log::{debug, warn};
use multi_asset_payroll::math;
use serde::Serialize;
use std::collections::HashSet;

use crate::utils::{parse_amount, validate_address, MAX_DECIMALS};
use crate::{CliError, Config, EmployeeConfig};

/// Decimals of an exchange rate in the config.
const RATE_DECIMALS: u32 = 18;

#[derive(Debug, Serialize)]
pub struct BurnLine {
    pub address: String,
    pub yearly_salary: i128,
    pub monthly_salary: i128,
}

#[derive(Debug, Serialize)]
pub struct BurnReport {
    pub employees: Vec<BurnLine>,
    pub total: i128,
}

#[derive(Debug, Serialize)]
pub struct RunwayReport {
    pub balance: i128,
    pub monthly_burn: i128,
    pub days: u64,
    pub unbounded: bool,
}

#[derive(Debug, Serialize)]
pub struct PreviewLeg {
    pub asset: String,
    pub percentage: u32,
    pub base_share: i128,
    pub amount: i128,
}

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub employee: String,
    pub gross: i128,
    pub disbursed: i128,
    pub paid_at: u64,
    pub legs: Vec<PreviewLeg>,
}

/// Rejects rosters the contract would never have accepted.
pub fn validate_roster(config: &Config) -> Result<(), CliError> {
    if config.treasury.decimals > MAX_DECIMALS {
        return Err(CliError::InvalidDecimals(config.treasury.decimals));
    }
    let mut seen = HashSet::new();
    for employee in &config.employees {
        validate_address(&employee.address).map_err(|err| CliError::InvalidAddress {
            address: employee.address.clone(),
            reason: err.to_string(),
        })?;
        if !seen.insert(employee.address.as_str()) {
            return Err(CliError::DuplicateEmployee(employee.address.clone()));
        }
        monthly_salary(employee)?;
        if !employee.allocation.is_empty() {
            validate_allocation(employee)?;
        }
    }
    for (asset, value) in &config.treasury.rates {
        parse_rate(asset, value)?;
    }
    debug!("Roster of {} employees is valid", config.employees.len());
    Ok(())
}

fn validate_allocation(employee: &EmployeeConfig) -> Result<(), CliError> {
    math::check_percentages(employee.allocation.iter().map(|entry| entry.percentage))
        .map_err(|err| CliError::from_payroll(err, &employee.address))?;

    let mut assets = HashSet::new();
    if !employee.allocation.iter().all(|entry| assets.insert(&entry.asset)) {
        return Err(CliError::InvalidAllocation(employee.address.clone()));
    }
    Ok(())
}

fn monthly_salary(employee: &EmployeeConfig) -> Result<i128, CliError> {
    math::monthly_salary(i128::from(employee.yearly_salary))
        .map_err(|err| CliError::from_payroll(err, &employee.address))
}

fn parse_rate(asset: &str, value: &str) -> Result<i128, CliError> {
    let invalid = || CliError::InvalidRate {
        asset: asset.to_string(),
        value: value.to_string(),
    };
    let rate = parse_amount(value, RATE_DECIMALS).map_err(|_| invalid())?;
    if rate < 0 {
        return Err(invalid());
    }
    Ok(rate)
}

/// Configured rate of `asset`, 0 when there is none.
pub fn rate_of(config: &Config, asset: &str) -> Result<i128, CliError> {
    match config.treasury.rates.get(asset) {
        Some(value) => parse_rate(asset, value),
        None => Ok(0),
    }
}

pub fn burn_report(config: &Config) -> Result<BurnReport, CliError> {
    let mut employees = Vec::with_capacity(config.employees.len());
    let mut total: i128 = 0;
    for employee in &config.employees {
        let monthly_salary = monthly_salary(employee)?;
        total = total.checked_add(monthly_salary).ok_or(CliError::Overflow)?;
        employees.push(BurnLine {
            address: employee.address.clone(),
            yearly_salary: i128::from(employee.yearly_salary),
            monthly_salary,
        });
    }
    Ok(BurnReport { employees, total })
}

/// Configured holdings in base currency. Assets without a rate are skipped.
pub fn base_equivalent_balance(config: &Config) -> Result<i128, CliError> {
    let mut total: i128 = 0;
    for (asset, held) in &config.treasury.balances {
        let held = i128::from(*held);
        if held <= 0 {
            continue;
        }
        let value = if *asset == config.treasury.base_asset {
            held
        } else {
            match rate_of(config, asset)? {
                0 => {
                    warn!("No exchange rate for {}, leaving it out of the runway", asset);
                    continue;
                }
                rate => math::base_value(held, rate)
                    .map_err(|err| CliError::from_payroll(err, asset))?,
            }
        };
        total = total.checked_add(value).ok_or(CliError::Overflow)?;
    }
    Ok(total)
}

pub fn runway_report(balance: i128, monthly_burn: i128) -> RunwayReport {
    let days = math::runway_days(balance, monthly_burn);
    RunwayReport {
        balance,
        monthly_burn,
        days,
        unbounded: days == math::RUNWAY_UNBOUNDED,
    }
}

/// Settlement `address` would receive at `now`, checked in the same order as
/// the contract: allocation, then timing, then rates.
pub fn preview(config: &Config, address: &str, now: u64) -> Result<PreviewReport, CliError> {
    let employee = config
        .employees
        .iter()
        .find(|employee| employee.address == address)
        .ok_or_else(|| CliError::EmployeeNotFound(address.to_string()))?;

    if employee.allocation.is_empty() {
        return Err(CliError::NoAllocation(address.to_string()));
    }
    let reference = if employee.last_payday == 0 {
        employee.hired_at
    } else {
        employee.last_payday
    };
    let interval = config.treasury.pay_interval;
    if !math::is_payday_due(reference, now, interval) {
        return Err(CliError::TooEarly(math::next_payday_at(reference, interval)));
    }

    let gross = monthly_salary(employee)?;
    let mut legs = Vec::with_capacity(employee.allocation.len());
    for entry in &employee.allocation {
        let base_share = math::base_share(gross, entry.percentage)
            .map_err(|err| CliError::from_payroll(err, address))?;
        let amount = math::asset_amount(base_share, rate_of(config, &entry.asset)?)
            .map_err(|err| CliError::from_payroll(err, &entry.asset))?;
        legs.push(PreviewLeg {
            asset: entry.asset.clone(),
            percentage: entry.percentage,
            base_share,
            amount,
        });
    }

    Ok(PreviewReport {
        employee: address.to_string(),
        gross,
        disbursed: legs.iter().map(|leg| leg.base_share).sum(),
        paid_at: now,
        legs,
    })
}
