//! Payday settlement planning.
//!
//! A settlement is computed in full before anything is transferred: the plan
//! either covers every allocated asset or the payday is rejected and no state
//! changes.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::PayrollError;
use crate::math;
use crate::storage::{Employee, SettlementLeg};

/// Transfers a payday will issue and the new `last_payday`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementPlan {
    pub gross: i128,
    pub legs: Vec<SettlementLeg>,
    pub paid_at: u64,
}

impl SettlementPlan {
    /// Base-currency value actually disbursed, at most `gross`.
    pub fn disbursed_base(&self) -> i128 {
        self.legs.iter().map(|leg| leg.base_share).sum()
    }
}

/// Builds the settlement of one month of pay for `employee` at `now`.
///
/// Assets are processed in allocation order. One settlement always pays a
/// single month, however long the employee waited.
pub fn plan_payday<F>(
    env: &Env,
    employee: &Employee,
    now: u64,
    interval: u64,
    rate_of: F,
) -> Result<SettlementPlan, PayrollError>
where
    F: Fn(&Address) -> i128,
{
    if !employee.has_allocation() {
        return Err(PayrollError::NoAllocation);
    }
    if !math::is_payday_due(employee.pay_reference(), now, interval) {
        return Err(PayrollError::TooEarly);
    }

    let gross = employee.monthly_salary;
    let mut legs = Vec::new(env);
    for (asset, percentage) in employee
        .allocated_tokens
        .iter()
        .zip(employee.allocated_percentages.iter())
    {
        let base_share = math::base_share(gross, percentage)?;
        let amount = math::asset_amount(base_share, rate_of(&asset))?;
        legs.push_back(SettlementLeg {
            asset,
            percentage,
            base_share,
            amount,
        });
    }

    Ok(SettlementPlan {
        gross,
        legs,
        paid_at: now,
    })
}

/// Rejects the plan unless every leg is covered by treasury holdings.
pub fn ensure_covered<F>(plan: &SettlementPlan, held: F) -> Result<(), PayrollError>
where
    F: Fn(&Address) -> i128,
{
    for leg in plan.legs.iter() {
        if leg.amount > held(&leg.asset) {
            return Err(PayrollError::InsufficientFunds);
        }
    }
    Ok(())
}
