use multi_asset_payroll::errors::PayrollError;
use thiserror::Error;

/// Problems with the configured roster or treasury, or a settlement the
/// contract would reject.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not find home directory")]
    NoHomeDir,

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Employee {0} is listed twice")]
    DuplicateEmployee(String),

    #[error("Employee {0} not found in config")]
    EmployeeNotFound(String),

    #[error("Invalid rate for {asset}: {value}")]
    InvalidRate { asset: String, value: String },

    #[error("Employee {0} has no allocation")]
    NoAllocation(String),

    #[error("Invalid allocation for {0}")]
    InvalidAllocation(String),

    #[error("No exchange rate for {0}")]
    RateUnavailable(String),

    #[error("Too early: next payday at {0}")]
    TooEarly(u64),

    #[error("Negative salary for {0}")]
    InvalidSalary(String),

    #[error("Unsupported decimals {0}, at most {max}", max = crate::utils::MAX_DECIMALS)]
    InvalidDecimals(u32),

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Payroll rule violated: {0:?}")]
    Payroll(PayrollError),
}

impl CliError {
    /// Maps an arithmetic error from the shared payroll math.
    pub fn from_payroll(err: PayrollError, subject: &str) -> Self {
        match err {
            PayrollError::InvalidSalary => CliError::InvalidSalary(subject.to_string()),
            PayrollError::InvalidAllocation => CliError::InvalidAllocation(subject.to_string()),
            PayrollError::RateUnavailable => CliError::RateUnavailable(subject.to_string()),
            PayrollError::NoAllocation => CliError::NoAllocation(subject.to_string()),
            PayrollError::ArithmeticOverflow => CliError::Overflow,
            other => CliError::Payroll(other),
        }
    }
}
