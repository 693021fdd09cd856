use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod error;
pub mod planner;
pub mod utils;

pub use error::CliError;

#[derive(Parser)]
#[command(name = "multipay-cli")]
#[command(about = "Treasury planner for the multi-asset payroll contract")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "~/.multipay/config.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show configuration and roster summary
    Status,

    /// Total monthly obligations of the roster
    Burnrate,

    /// Days the treasury can keep paying the roster
    Runway {
        /// Base-currency balance to use instead of the configured holdings
        #[arg(long)]
        balance: Option<i128>,
    },

    /// Settlement an employee would receive on payday
    Preview {
        /// Employee address
        #[arg(long)]
        employee: String,

        /// Unix timestamp to evaluate at, defaults to now
        #[arg(long)]
        now: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    pub treasury: TreasuryConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<EmployeeConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub network_passphrase: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContractConfig {
    pub default_contract_id: Option<String>,
}

/// Treasury holdings and oracle rates, keyed by asset name.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreasuryConfig {
    pub base_asset: String,
    /// Decimals used when displaying amounts.
    #[serde(default)]
    pub decimals: u32,
    /// Seconds between two paydays.
    #[serde(default = "default_pay_interval")]
    pub pay_interval: u64,
    #[serde(default)]
    pub balances: BTreeMap<String, i64>,
    /// Base units per asset unit as a decimal string, e.g. "1.25".
    #[serde(default)]
    pub rates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeConfig {
    pub address: String,
    pub yearly_salary: i64,
    #[serde(default)]
    pub hired_at: u64,
    /// 0 until the first payday.
    #[serde(default)]
    pub last_payday: u64,
    #[serde(default)]
    pub allocation: Vec<AllocationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub asset: String,
    pub percentage: u32,
}

fn default_pay_interval() -> u64 {
    multi_asset_payroll::math::DEFAULT_PAY_INTERVAL
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                rpc_url: "https://soroban-testnet.stellar.org:443".to_string(),
                network_passphrase: "Test SDF Network ; September 2015".to_string(),
            },
            contract: ContractConfig {
                default_contract_id: None,
            },
            treasury: TreasuryConfig {
                base_asset: "USDC".to_string(),
                decimals: 0,
                pay_interval: default_pay_interval(),
                balances: BTreeMap::new(),
                rates: BTreeMap::new(),
            },
            employees: Vec::new(),
        }
    }
}
