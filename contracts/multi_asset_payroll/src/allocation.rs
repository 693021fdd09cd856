use soroban_sdk::{Address, Vec};

use crate::errors::PayrollError;
use crate::math;

/// Validates an allocation before it replaces the stored one.
///
/// Lists must be parallel and non-empty, percentages must add up to 100 and
/// no asset may appear twice.
pub fn validate_allocation(
    tokens: &Vec<Address>,
    percentages: &Vec<u32>,
) -> Result<(), PayrollError> {
    if tokens.is_empty() || tokens.len() != percentages.len() {
        return Err(PayrollError::InvalidAllocation);
    }
    math::check_percentages(percentages.iter())?;

    for i in 0..tokens.len() {
        let token = tokens.get_unchecked(i);
        for j in (i + 1)..tokens.len() {
            if tokens.get_unchecked(j) == token {
                return Err(PayrollError::InvalidAllocation);
            }
        }
    }
    Ok(())
}

/// Allocation given at registration: either empty or a valid allocation.
pub fn validate_initial_allocation(
    tokens: &Vec<Address>,
    percentages: &Vec<u32>,
) -> Result<(), PayrollError> {
    if tokens.is_empty() && percentages.is_empty() {
        return Ok(());
    }
    validate_allocation(tokens, percentages)
}
