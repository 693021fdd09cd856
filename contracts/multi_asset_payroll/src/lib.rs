#![no_std]

pub mod allocation;
pub mod errors;
pub mod events;
pub mod math;
pub mod settlement;
pub mod storage;
pub mod treasury;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use errors::PayrollError;
use events::{
    AllocationUpdated, AssetTracked, AssetUntracked, EmployeeAdded, EmployeeRemoved, ExchangeRateUpdated, FundsAdded,
    OracleChanged, OwnershipTransferred, PayIntervalUpdated, PaydayCompleted, SalaryPaid,
    SalaryUpdated,
};
use storage::{Employee, EscapeHatchReport, SettlementLeg};

/// Multi-asset payroll treasury.
///
/// Keeps a roster of salaried employees, lets each of them split their monthly
/// pay across several assets, converts base-currency salaries into those assets
/// with oracle-supplied rates and pays out at most once per pay interval.
///
/// # Roles
///
/// - `owner`: manages the roster, tunes the pay interval and can sweep the
///   treasury in an emergency
/// - `oracle`: the only writer of exchange rates
/// - employees: set their own allocation and trigger their own payday
///
/// Every restricted function takes the acting address, requires its
/// authorization and compares it against the stored role.
#[contract]
pub struct PayrollContract;

fn require_owner(env: &Env, caller: &Address) -> Result<(), PayrollError> {
    caller.require_auth();
    if *caller != storage::read_owner(env)? {
        return Err(PayrollError::Unauthorized);
    }
    Ok(())
}

fn require_oracle(env: &Env, caller: &Address) -> Result<(), PayrollError> {
    caller.require_auth();
    if *caller != storage::read_oracle(env)? {
        return Err(PayrollError::Unauthorized);
    }
    Ok(())
}

#[contractimpl]
impl PayrollContract {
    /// Initializes the payroll treasury.
    ///
    /// # Arguments
    ///
    /// * `owner` - Administrative authority (must authenticate)
    /// * `oracle` - Sole writer of exchange rates
    /// * `base_asset` - Token in which salaries are accounted
    ///
    /// # Errors
    ///
    /// `AlreadyInitialized` when called twice.
    pub fn initialize(
        env: Env,
        owner: Address,
        oracle: Address,
        base_asset: Address,
    ) -> Result<(), PayrollError> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(PayrollError::AlreadyInitialized);
        }

        storage::write_owner(&env, &owner);
        storage::write_oracle(&env, &oracle);
        storage::write_base_asset(&env, &base_asset);
        storage::write_pay_interval(&env, math::DEFAULT_PAY_INTERVAL);
        storage::write_employee_count(&env, 0);
        storage::track_asset(&env, &base_asset)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Employee registry
    // ------------------------------------------------------------------

    /// Registers an employee and returns its id.
    ///
    /// # Arguments
    ///
    /// * `caller` - Must be the owner
    /// * `employee` - Address the employee is paid to and acts from
    /// * `tokens` / `percentages` - Initial allocation, may both be empty
    /// * `yearly_salary` - Base-currency units per year
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `AlreadyExists`, `InvalidSalary`, `InvalidAllocation`
    pub fn add_employee(
        env: Env,
        caller: Address,
        employee: Address,
        tokens: Vec<Address>,
        percentages: Vec<u32>,
        yearly_salary: i128,
    ) -> Result<u32, PayrollError> {
        require_owner(&env, &caller)?;
        if storage::read_address_id(&env, &employee) != 0 {
            return Err(PayrollError::AlreadyExists);
        }
        let monthly_salary = math::monthly_salary(yearly_salary)?;
        allocation::validate_initial_allocation(&tokens, &percentages)?;

        let count = storage::read_employee_count(&env)
            .checked_add(1)
            .ok_or(PayrollError::ArithmeticOverflow)?;
        let id = storage::next_employee_id(&env)?;
        let record = Employee {
            id,
            address: employee.clone(),
            yearly_salary,
            monthly_salary,
            hired_at: env.ledger().timestamp(),
            last_payday: 0,
            allocated_tokens: tokens,
            allocated_percentages: percentages,
        };

        storage::write_employee(&env, &record);
        storage::write_address_id(&env, &employee, id);
        storage::write_employee_count(&env, count);
        storage::adjust_monthly_burn(&env, monthly_salary)?;

        events::emit_employee_added(
            &env,
            EmployeeAdded {
                id,
                employee,
                yearly_salary,
                monthly_salary,
            },
        );
        Ok(id)
    }

    /// Changes a yearly salary; the monthly one follows, `last_payday` stays.
    pub fn set_employee_salary(
        env: Env,
        caller: Address,
        id: u32,
        yearly_salary: i128,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        let mut employee = storage::read_employee(&env, id)?;
        let monthly_salary = math::monthly_salary(yearly_salary)?;
        storage::adjust_monthly_burn(&env, monthly_salary - employee.monthly_salary)?;

        employee.yearly_salary = yearly_salary;
        employee.monthly_salary = monthly_salary;
        storage::write_employee(&env, &employee);

        events::emit_salary_updated(
            &env,
            SalaryUpdated {
                id,
                yearly_salary,
                monthly_salary,
            },
        );
        Ok(())
    }

    /// Removes an employee. Salary accrued since the last payday is forfeited.
    pub fn remove_employee(env: Env, caller: Address, id: u32) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        let employee = storage::read_employee(&env, id)?;

        storage::delete_employee(&env, &employee);
        storage::adjust_monthly_burn(&env, -employee.monthly_salary)?;
        let count = storage::read_employee_count(&env).saturating_sub(1);
        storage::write_employee_count(&env, count);

        events::emit_employee_removed(
            &env,
            EmployeeRemoved {
                id,
                employee: employee.address,
            },
        );
        Ok(())
    }

    pub fn get_employee_count(env: Env) -> u32 {
        storage::read_employee_count(&env)
    }

    pub fn get_employee(env: Env, id: u32) -> Option<Employee> {
        storage::find_employee(&env, id)
    }

    /// Id registered for `address`, 0 when there is none.
    pub fn address_to_id(env: Env, address: Address) -> u32 {
        storage::read_address_id(&env, &address)
    }

    /// Id the next registered employee will get.
    pub fn employee_ids(env: Env) -> u32 {
        storage::read_next_employee_id(&env)
    }

    // ------------------------------------------------------------------
    // Allocation
    // ------------------------------------------------------------------

    /// Replaces the caller's own pay allocation.
    ///
    /// The replacement is all-or-nothing: a rejected allocation leaves the
    /// previous one in place.
    ///
    /// # Errors
    ///
    /// `NotFound` if `employee` is not registered, `InvalidAllocation` if the
    /// lists differ in length, are empty, repeat an asset or do not sum to 100.
    pub fn determine_allocation(
        env: Env,
        employee: Address,
        tokens: Vec<Address>,
        percentages: Vec<u32>,
    ) -> Result<(), PayrollError> {
        employee.require_auth();
        let mut record = storage::read_employee_by_address(&env, &employee)?;
        allocation::validate_allocation(&tokens, &percentages)?;

        record.allocated_tokens = tokens.clone();
        record.allocated_percentages = percentages.clone();
        storage::write_employee(&env, &record);

        events::emit_allocation_updated(
            &env,
            AllocationUpdated {
                id: record.id,
                tokens,
                percentages,
            },
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Exchange rates
    // ------------------------------------------------------------------

    /// Stores the latest rate of `asset`, in base units per asset unit * 10^18.
    ///
    /// A priced asset joins the tracked list.
    pub fn set_exchange_rate(
        env: Env,
        caller: Address,
        asset: Address,
        rate: i128,
    ) -> Result<(), PayrollError> {
        require_oracle(&env, &caller)?;
        if rate < 0 {
            return Err(PayrollError::InvalidRate);
        }
        storage::track_asset(&env, &asset)?;
        storage::write_exchange_rate(&env, &asset, rate);
        events::emit_exchange_rate_updated(&env, ExchangeRateUpdated { asset, rate });
        Ok(())
    }

    /// Latest rate of `asset`, 0 if never set.
    pub fn exchange_rate(env: Env, asset: Address) -> i128 {
        storage::read_exchange_rate(&env, &asset)
    }

    // ------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------

    /// Pays the caller one month of salary split over their allocation.
    ///
    /// Every leg is computed and checked against treasury holdings before
    /// the first transfer. `last_payday` moves only when all legs went out.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NoAllocation`, `TooEarly`, `RateUnavailable`,
    /// `InsufficientFunds`
    pub fn payday(env: Env, employee: Address) -> Result<Vec<SettlementLeg>, PayrollError> {
        employee.require_auth();
        let mut record = storage::read_employee_by_address(&env, &employee)?;

        let plan = settlement::plan_payday(
            &env,
            &record,
            env.ledger().timestamp(),
            storage::read_pay_interval(&env),
            |asset| storage::read_exchange_rate(&env, asset),
        )?;
        settlement::ensure_covered(&plan, |asset| treasury::held_balance(&env, asset))?;

        let me = env.current_contract_address();
        for leg in plan.legs.iter() {
            if leg.amount > 0 {
                token::Client::new(&env, &leg.asset).transfer(&me, &employee, &leg.amount);
            }
            events::emit_salary_paid(
                &env,
                SalaryPaid {
                    id: record.id,
                    employee: employee.clone(),
                    asset: leg.asset.clone(),
                    base_share: leg.base_share,
                    amount: leg.amount,
                },
            );
        }

        record.last_payday = plan.paid_at;
        storage::write_employee(&env, &record);

        events::emit_payday_completed(
            &env,
            PaydayCompleted {
                id: record.id,
                employee,
                gross: plan.gross,
                disbursed: plan.disbursed_base(),
                timestamp: plan.paid_at,
            },
        );
        Ok(plan.legs)
    }

    /// Earliest timestamp at which employee `id` can call `payday`.
    pub fn next_payday(env: Env, id: u32) -> Result<u64, PayrollError> {
        let employee = storage::read_employee(&env, id)?;
        Ok(math::next_payday_at(
            employee.pay_reference(),
            storage::read_pay_interval(&env),
        ))
    }

    pub fn pay_interval(env: Env) -> u64 {
        storage::read_pay_interval(&env)
    }

    pub fn set_pay_interval(env: Env, caller: Address, seconds: u64) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        if seconds == 0 {
            return Err(PayrollError::InvalidAmount);
        }
        storage::write_pay_interval(&env, seconds);
        events::emit_pay_interval_updated(&env, PayIntervalUpdated { seconds });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Treasury
    // ------------------------------------------------------------------

    /// Deposits `amount` of `asset` from `from` into the treasury.
    ///
    /// Only tracked assets are accepted so that every deposit stays
    /// reachable by `scape_hatch`.
    pub fn add_funds(
        env: Env,
        from: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), PayrollError> {
        storage::require_initialized(&env)?;
        from.require_auth();
        if amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }
        if !storage::is_tracked(&env, &asset) {
            return Err(PayrollError::UntrackedAsset);
        }

        token::Client::new(&env, &asset).transfer(&from, &env.current_contract_address(), &amount);

        events::emit_funds_added(&env, FundsAdded { from, asset, amount });
        Ok(())
    }

    /// Assets the treasury accounts for in runway and emergency withdrawal.
    pub fn tracked_assets(env: Env) -> Vec<Address> {
        storage::read_tracked_assets(&env)
    }

    /// Adds `asset` to the tracked list without pricing it.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `TooManyAssets`
    pub fn track_asset(env: Env, caller: Address, asset: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        storage::track_asset(&env, &asset)?;
        events::emit_asset_tracked(&env, AssetTracked { asset });
        Ok(())
    }

    /// Drops `asset` from the tracked list. Its balance, if any, is no
    /// longer valued or swept.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `BaseAssetRequired`, `UntrackedAsset`
    pub fn untrack_asset(env: Env, caller: Address, asset: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        if asset == storage::read_base_asset(&env)? {
            return Err(PayrollError::BaseAssetRequired);
        }
        storage::untrack_asset(&env, &asset)?;
        events::emit_asset_untracked(&env, AssetUntracked { asset });
        Ok(())
    }

    /// Total monthly obligations in base currency.
    pub fn calculate_payroll_burnrate(env: Env) -> Result<i128, PayrollError> {
        storage::require_initialized(&env)?;
        Ok(treasury::total_monthly_burn(&env))
    }

    /// Days the treasury can keep paying the current roster.
    ///
    /// Returns `math::RUNWAY_UNBOUNDED` when nobody is owed anything.
    pub fn calculate_payroll_runway(env: Env) -> Result<u64, PayrollError> {
        storage::require_initialized(&env)?;
        let burn = treasury::total_monthly_burn(&env);
        if burn == 0 {
            return Ok(math::RUNWAY_UNBOUNDED);
        }
        let balance = treasury::base_equivalent_balance(&env)?;
        Ok(math::runway_days(balance, burn))
    }

    /// Emergency withdrawal of every tracked asset to the owner.
    ///
    /// Best effort: assets that cannot be moved are listed in the report.
    pub fn scape_hatch(env: Env, caller: Address) -> Result<EscapeHatchReport, PayrollError> {
        require_owner(&env, &caller)?;
        Ok(treasury::sweep_to(&env, &caller))
    }

    // ------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, PayrollError> {
        storage::read_owner(&env)
    }

    pub fn oracle(env: Env) -> Result<Address, PayrollError> {
        storage::read_oracle(&env)
    }

    pub fn base_asset(env: Env) -> Result<Address, PayrollError> {
        storage::read_base_asset(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        storage::write_owner(&env, &new_owner);
        events::emit_ownership_transferred(
            &env,
            OwnershipTransferred {
                previous: caller,
                owner: new_owner,
            },
        );
        Ok(())
    }

    /// Hands the oracle role over; only the current oracle may do so.
    pub fn set_oracle(env: Env, caller: Address, new_oracle: Address) -> Result<(), PayrollError> {
        require_oracle(&env, &caller)?;
        storage::write_oracle(&env, &new_oracle);
        events::emit_oracle_changed(
            &env,
            OracleChanged {
                previous: caller,
                oracle: new_oracle,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
