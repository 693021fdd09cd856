//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contractevent, Address, Env, Vec};

/// Event: employee registered
#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeAdded {
    pub id: u32,
    pub employee: Address,
    pub yearly_salary: i128,
    pub monthly_salary: i128,
}

/// Event: employee removed, unpaid salary forfeited
#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeRemoved {
    pub id: u32,
    pub employee: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryUpdated {
    pub id: u32,
    pub yearly_salary: i128,
    pub monthly_salary: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AllocationUpdated {
    pub id: u32,
    pub tokens: Vec<Address>,
    pub percentages: Vec<u32>,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ExchangeRateUpdated {
    pub asset: Address,
    pub rate: i128,
}

/// Event: one settlement leg transferred
#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryPaid {
    pub id: u32,
    pub employee: Address,
    pub asset: Address,
    pub base_share: i128,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PaydayCompleted {
    pub id: u32,
    pub employee: Address,
    pub gross: i128,
    /// Base value actually paid out, `gross` minus rounding.
    pub disbursed: i128,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct FundsAdded {
    pub from: Address,
    pub asset: Address,
    pub amount: i128,
}

/// Event: emergency withdrawal moved an asset balance to the owner
#[contractevent]
#[derive(Clone, Debug)]
pub struct TreasurySwept {
    pub owner: Address,
    pub asset: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SweepFailed {
    pub asset: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous: Address,
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OracleChanged {
    pub previous: Address,
    pub oracle: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PayIntervalUpdated {
    pub seconds: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AssetTracked {
    pub asset: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AssetUntracked {
    pub asset: Address,
}

pub fn emit_employee_added(e: &Env, event: EmployeeAdded) {
    event.publish(e);
}

pub fn emit_employee_removed(e: &Env, event: EmployeeRemoved) {
    event.publish(e);
}

pub fn emit_salary_updated(e: &Env, event: SalaryUpdated) {
    event.publish(e);
}

pub fn emit_allocation_updated(e: &Env, event: AllocationUpdated) {
    event.publish(e);
}

pub fn emit_exchange_rate_updated(e: &Env, event: ExchangeRateUpdated) {
    event.publish(e);
}

pub fn emit_salary_paid(e: &Env, event: SalaryPaid) {
    event.publish(e);
}

pub fn emit_payday_completed(e: &Env, event: PaydayCompleted) {
    event.publish(e);
}

pub fn emit_funds_added(e: &Env, event: FundsAdded) {
    event.publish(e);
}

pub fn emit_treasury_swept(e: &Env, event: TreasurySwept) {
    event.publish(e);
}

pub fn emit_sweep_failed(e: &Env, event: SweepFailed) {
    event.publish(e);
}

pub fn emit_ownership_transferred(e: &Env, event: OwnershipTransferred) {
    event.publish(e);
}

pub fn emit_oracle_changed(e: &Env, event: OracleChanged) {
    event.publish(e);
}

pub fn emit_pay_interval_updated(e: &Env, event: PayIntervalUpdated) {
    event.publish(e);
}

pub fn emit_asset_tracked(e: &Env, event: AssetTracked) {
    event.publish(e);
}

pub fn emit_asset_untracked(e: &Env, event: AssetUntracked) {
    event.publish(e);
}
