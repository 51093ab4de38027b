use anchor_lang::prelude::*;

/// Custom error codes for the vesting pools program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    NotAuthorized,

    #[msg("Pool does not exist")]
    PoolNotFound,

    #[msg("Address is not in the whitelist")]
    NotWhitelisted,

    #[msg("Percentage divisor can not be zero")]
    InvalidPercentageDivisor,

    #[msg("Listing and cliff percentage can not exceed 100")]
    PercentageOverflow,

    #[msg("Token amount can not be 0")]
    ZeroAmount,

    #[msg("Addresses and token amount arrays must be the same size")]
    LengthMismatch,

    #[msg("Allocated token amount will exceed total pool amount")]
    CapacityExceeded,

    #[msg("There are no claimable tokens")]
    NothingClaimable,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Pool name is too long")]
    PoolNameTooLong,

    #[msg("Vesting duration must be at least one month")]
    InvalidVestingDuration,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Beneficiary account does not match pool and wallet")]
    InvalidBeneficiaryAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
