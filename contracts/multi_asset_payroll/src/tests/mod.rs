#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, Vec,
};

use crate::math::RATE_PRECISION;
use crate::{PayrollContract, PayrollContractClient};

mod test_payday;

// ============================================================================
// CONSTANTS
// ============================================================================

pub const ONE_DAY: u64 = 86_400;
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;
pub const THIRTY_ONE_DAYS: u64 = 31 * ONE_DAY;

/// One base unit per asset unit.
pub const UNIT_RATE: i128 = RATE_PRECISION;

/// 240_000 a year, 20_000 a month.
pub const YEARLY_SALARY: i128 = 240_000;
pub const MONTHLY_SALARY: i128 = 20_000;

// ============================================================================
// HELPERS
// ============================================================================

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: PayrollContractClient<'static>,
    pub owner: Address,
    pub oracle: Address,
    pub base: Address,
}

/// Deploys and initializes the payroll contract with a fresh base token.
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let oracle = Address::generate(&env);
    let base = create_token(&env);

    let contract_id = env.register(PayrollContract, ());
    let client = PayrollContractClient::new(&env, &contract_id);
    client.initialize(&owner, &oracle, &base);

    TestContext {
        env,
        contract_id,
        client,
        owner,
        oracle,
        base,
    }
}

/// Deploys a Stellar Asset Contract and returns its address.
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Advances the ledger timestamp by `seconds`.
pub fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

impl TestContext {
    /// Registers a new employee paid 100% in the base asset.
    pub fn hire(&self, yearly_salary: i128) -> (Address, u32) {
        let employee = Address::generate(&self.env);
        let id = self.client.add_employee(
            &self.owner,
            &employee,
            &vec![&self.env, self.base.clone()],
            &vec![&self.env, 100u32],
            &yearly_salary,
        );
        (employee, id)
    }

    /// Registers a new employee without any allocation.
    pub fn hire_unallocated(&self, yearly_salary: i128) -> (Address, u32) {
        let employee = Address::generate(&self.env);
        let id = self.client.add_employee(
            &self.owner,
            &employee,
            &Vec::new(&self.env),
            &Vec::new(&self.env),
            &yearly_salary,
        );
        (employee, id)
    }

    pub fn set_rate(&self, asset: &Address, rate: i128) {
        self.client.set_exchange_rate(&self.oracle, asset, &rate);
    }

    /// Tracks `asset` if needed and mints `amount` of it into the treasury.
    pub fn fund(&self, asset: &Address, amount: i128) {
        self.client.track_asset(&self.owner, asset);
        let funder = Address::generate(&self.env);
        mint(&self.env, asset, &funder, amount);
        self.client.add_funds(&funder, asset, &amount);
    }

    pub fn treasury_balance(&self, asset: &Address) -> i128 {
        balance(&self.env, asset, &self.contract_id)
    }
}
