//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Vesting months are fixed 30-day months, not calendar months.
pub const DAYS_PER_MONTH: u32 = 30;

/// Max byte length of a pool name.
pub const MAX_POOL_NAME_LEN: usize = 32;

/// Max beneficiaries processed per `allocate_batch` call.
pub const MAX_BATCH_ALLOCATION: usize = 10;

pub const CONFIG_SEED: &[u8] = b"vesting_config";
pub const VAULT_SEED: &[u8] = b"vault";
pub const POOL_SEED: &[u8] = b"pool";
pub const BENEFICIARY_SEED: &[u8] = b"beneficiary";
