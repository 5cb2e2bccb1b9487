use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    Unauthorized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpirationLedger = 6,
    InvalidDecimal = 7,
    Overflow = 8,
}
