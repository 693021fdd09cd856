use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Payroll Errors
//-----------------------------------------------------------------------------

/// Errors returned by every fallible payroll operation.
///
/// Codes are part of the contract ABI and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PayrollError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller does not hold the role the operation requires.
    Unauthorized = 3,
    /// Unknown employee id or address.
    NotFound = 4,
    /// Address is already registered as an employee.
    AlreadyExists = 5,
    /// Asset and percentage lists are malformed.
    InvalidAllocation = 6,
    /// Payday requested before any allocation was set.
    NoAllocation = 7,
    /// An allocated asset has no exchange rate.
    RateUnavailable = 8,
    /// The pay interval has not elapsed yet.
    TooEarly = 9,
    /// Treasury holdings cannot cover a settlement leg.
    InsufficientFunds = 10,
    InvalidSalary = 11,
    InvalidRate = 12,
    InvalidAmount = 13,
    ArithmeticOverflow = 14,
    /// Asset is not in the treasury's tracked list.
    UntrackedAsset = 15,
    /// Tracked list is already at `MAX_TRACKED_ASSETS`.
    TooManyAssets = 16,
    /// The base asset cannot leave the tracked list.
    BaseAssetRequired = 17,
}
