use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::PayrollError;
use crate::events::{emit_sweep_failed, emit_treasury_swept, SweepFailed, TreasurySwept};
use crate::math;
use crate::storage::{self, EscapeHatchReport, SweptAsset};

/// Balance of `asset` held by this contract, 0 when it cannot be read.
pub fn held_balance(env: &Env, asset: &Address) -> i128 {
    match token::Client::new(env, asset).try_balance(&env.current_contract_address()) {
        Ok(Ok(balance)) => balance,
        _ => 0,
    }
}

/// Sum of the monthly salaries of every live employee.
pub fn total_monthly_burn(env: &Env) -> i128 {
    storage::read_monthly_burn(env)
}

/// Treasury holdings expressed in base currency.
///
/// The base asset counts at face value; other assets count through their
/// exchange rate and are ignored while they have none.
pub fn base_equivalent_balance(env: &Env) -> Result<i128, PayrollError> {
    let base_asset = storage::read_base_asset(env)?;
    let mut total: i128 = 0;
    for asset in storage::read_tracked_assets(env).iter() {
        let held = held_balance(env, &asset);
        if held <= 0 {
            continue;
        }
        let value = if asset == base_asset {
            held
        } else {
            match storage::read_exchange_rate(env, &asset) {
                0 => continue,
                rate => math::base_value(held, rate)?,
            }
        };
        total = total
            .checked_add(value)
            .ok_or(PayrollError::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// Moves every tracked balance to `owner`, asset by asset.
///
/// A leg that fails is reported and skipped; the others still go through.
pub fn sweep_to(env: &Env, owner: &Address) -> EscapeHatchReport {
    let me = env.current_contract_address();
    let mut swept = Vec::new(env);
    let mut failed = Vec::new(env);

    for asset in storage::read_tracked_assets(env).iter() {
        let client = token::Client::new(env, &asset);
        let balance = match client.try_balance(&me) {
            Ok(Ok(balance)) => balance,
            _ => {
                emit_sweep_failed(env, SweepFailed { asset: asset.clone() });
                failed.push_back(asset);
                continue;
            }
        };
        if balance <= 0 {
            continue;
        }

        match client.try_transfer(&me, owner, &balance) {
            Ok(Ok(())) => {
                emit_treasury_swept(
                    env,
                    TreasurySwept {
                        owner: owner.clone(),
                        asset: asset.clone(),
                        amount: balance,
                    },
                );
                swept.push_back(SweptAsset {
                    asset,
                    amount: balance,
                });
            }
            _ => {
                emit_sweep_failed(env, SweepFailed { asset: asset.clone() });
                failed.push_back(asset);
            }
        }
    }

    EscapeHatchReport { swept, failed }
}
