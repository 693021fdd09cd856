use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::PayrollError;
use crate::math::{DEFAULT_PAY_INTERVAL, MAX_TRACKED_ASSETS};

/// Registered employee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub address: Address,
    /// Base-currency units per year.
    pub yearly_salary: i128,
    /// Always `yearly_salary / 12`, recomputed on every salary change.
    pub monthly_salary: i128,
    pub hired_at: u64,
    /// 0 until the first payday.
    pub last_payday: u64,
    pub allocated_tokens: Vec<Address>,
    /// Parallel to `allocated_tokens`, sums to 100 unless both are empty.
    pub allocated_percentages: Vec<u32>,
}

impl Employee {
    pub fn has_allocation(&self) -> bool {
        !self.allocated_tokens.is_empty()
    }

    /// Timestamp the pay interval is measured from.
    pub fn pay_reference(&self) -> u64 {
        if self.last_payday == 0 {
            self.hired_at
        } else {
            self.last_payday
        }
    }
}

/// One asset transfer of a settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementLeg {
    pub asset: Address,
    pub percentage: u32,
    /// Base-currency value of this leg.
    pub base_share: i128,
    /// Asset units transferred.
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweptAsset {
    pub asset: Address,
    pub amount: i128,
}

/// Outcome of an emergency withdrawal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapeHatchReport {
    pub swept: Vec<SweptAsset>,
    /// Assets whose balance could not be read or moved.
    pub failed: Vec<Address>,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Oracle,
    /// Asset in which salaries are denominated
    BaseAsset,
    PayInterval,
    /// Live employees
    EmployeeCount,
    /// Next id to hand out, starts at 1
    NextEmployeeId,
    Employee(u32),
    AddressToId(Address),
    ExchangeRate(Address),
    /// Sum of the monthly salaries of live employees
    MonthlyBurn,
    /// Assets swept and valued by the treasury, in first-seen order
    TrackedAssets,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn require_initialized(env: &Env) -> Result<(), PayrollError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(PayrollError::NotInitialized)
    }
}

pub fn read_owner(env: &Env) -> Result<Address, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .ok_or(PayrollError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

pub fn read_oracle(env: &Env) -> Result<Address, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::Oracle)
        .ok_or(PayrollError::NotInitialized)
}

pub fn write_oracle(env: &Env, oracle: &Address) {
    env.storage().persistent().set(&DataKey::Oracle, oracle);
}

pub fn read_base_asset(env: &Env) -> Result<Address, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::BaseAsset)
        .ok_or(PayrollError::NotInitialized)
}

pub fn write_base_asset(env: &Env, asset: &Address) {
    env.storage().persistent().set(&DataKey::BaseAsset, asset);
}

pub fn read_pay_interval(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::PayInterval)
        .unwrap_or(DEFAULT_PAY_INTERVAL)
}

pub fn write_pay_interval(env: &Env, seconds: u64) {
    env.storage().persistent().set(&DataKey::PayInterval, &seconds);
}

// Registry

pub fn read_employee_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::EmployeeCount)
        .unwrap_or(0)
}

pub fn write_employee_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::EmployeeCount, &count);
}

pub fn read_next_employee_id(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::NextEmployeeId)
        .unwrap_or(1)
}

/// Hands out the next id and advances the counter.
pub fn next_employee_id(env: &Env) -> Result<u32, PayrollError> {
    let id = read_next_employee_id(env);
    let next = id.checked_add(1).ok_or(PayrollError::ArithmeticOverflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::NextEmployeeId, &next);
    Ok(id)
}

pub fn read_employee(env: &Env, id: u32) -> Result<Employee, PayrollError> {
    env.storage()
        .persistent()
        .get(&DataKey::Employee(id))
        .ok_or(PayrollError::NotFound)
}

pub fn find_employee(env: &Env, id: u32) -> Option<Employee> {
    env.storage().persistent().get(&DataKey::Employee(id))
}

pub fn write_employee(env: &Env, employee: &Employee) {
    env.storage()
        .persistent()
        .set(&DataKey::Employee(employee.id), employee);
}

pub fn read_address_id(env: &Env, address: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::AddressToId(address.clone()))
        .unwrap_or(0)
}

pub fn write_address_id(env: &Env, address: &Address, id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::AddressToId(address.clone()), &id);
}

/// Resolves an address to its live employee record.
pub fn read_employee_by_address(env: &Env, address: &Address) -> Result<Employee, PayrollError> {
    match read_address_id(env, address) {
        0 => Err(PayrollError::NotFound),
        id => read_employee(env, id),
    }
}

/// Drops both registry entries of an employee.
pub fn delete_employee(env: &Env, employee: &Employee) {
    let storage = env.storage().persistent();
    storage.remove(&DataKey::AddressToId(employee.address.clone()));
    storage.remove(&DataKey::Employee(employee.id));
}

// Rates and holdings

pub fn read_exchange_rate(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::ExchangeRate(asset.clone()))
        .unwrap_or(0)
}

pub fn write_exchange_rate(env: &Env, asset: &Address, rate: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::ExchangeRate(asset.clone()), &rate);
}

pub fn read_tracked_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::TrackedAssets)
        .unwrap_or(Vec::new(env))
}

pub fn is_tracked(env: &Env, asset: &Address) -> bool {
    read_tracked_assets(env).contains(asset)
}

/// Appends `asset` unless already tracked; the list never exceeds
/// `MAX_TRACKED_ASSETS`.
pub fn track_asset(env: &Env, asset: &Address) -> Result<(), PayrollError> {
    let mut assets = read_tracked_assets(env);
    if assets.contains(asset) {
        return Ok(());
    }
    if assets.len() >= MAX_TRACKED_ASSETS {
        return Err(PayrollError::TooManyAssets);
    }
    assets.push_back(asset.clone());
    env.storage()
        .persistent()
        .set(&DataKey::TrackedAssets, &assets);
    Ok(())
}

pub fn untrack_asset(env: &Env, asset: &Address) -> Result<(), PayrollError> {
    let mut assets = read_tracked_assets(env);
    let index = assets
        .first_index_of(asset)
        .ok_or(PayrollError::UntrackedAsset)?;
    assets.remove_unchecked(index);
    env.storage()
        .persistent()
        .set(&DataKey::TrackedAssets, &assets);
    Ok(())
}

// Burn

pub fn read_monthly_burn(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::MonthlyBurn)
        .unwrap_or(0)
}

/// Shifts the stored burn by `delta`, negative on removals and pay cuts.
pub fn adjust_monthly_burn(env: &Env, delta: i128) -> Result<(), PayrollError> {
    let burn = read_monthly_burn(env)
        .checked_add(delta)
        .ok_or(PayrollError::ArithmeticOverflow)?;
    env.storage().persistent().set(&DataKey::MonthlyBurn, &burn);
    Ok(())
}
