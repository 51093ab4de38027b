//! Staged unlock math (integer only, floor rounding).
//!
//! - listing tranche unlocks at `listing_date`
//! - cliff tranche unlocks at `cliff_end = listing_date + cliff_days * 1 day`
//! - vested tranche unlocks in whole periods (1 day or 30 days) counted from `cliff_end`,
//!   exactly at full maturity

use crate::constants::{DAYS_PER_MONTH, SECONDS_PER_DAY};
use crate::error::VestingError;
use crate::state::{Beneficiary, UnlockType, VestingPool};

pub fn cliff_end_date(listing_date: i64, cliff_days: u32) -> Result<i64, VestingError> {
    (cliff_days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| listing_date.checked_add(secs))
        .ok_or(VestingError::MathOverflow)
}

pub fn vesting_end_date(
    listing_date: i64,
    cliff_days: u32,
    vesting_duration_months: u32,
) -> Result<i64, VestingError> {
    let cliff_end = cliff_end_date(listing_date, cliff_days)?;
    (vesting_duration_months as i64)
        .checked_mul(DAYS_PER_MONTH as i64)
        .and_then(|days| days.checked_mul(SECONDS_PER_DAY))
        .and_then(|secs| cliff_end.checked_add(secs))
        .ok_or(VestingError::MathOverflow)
}

/// Whole periods elapsed since the cliff end, capped at the period count.
pub fn elapsed_periods(unlock_type: UnlockType, vesting_duration_months: u32, elapsed: i64) -> u64 {
    if elapsed <= 0 {
        return 0;
    }
    let total = unlock_type.total_periods(vesting_duration_months);
    let periods = (elapsed / unlock_type.period_seconds()) as u64;
    periods.min(total)
}

/// Vested tranche unlocked after `elapsed` seconds past the cliff end.
pub fn vested_unlocked(
    vested_token_amount: u64,
    unlock_type: UnlockType,
    vesting_duration_months: u32,
    elapsed: i64,
) -> Result<u64, VestingError> {
    let total = unlock_type.total_periods(vesting_duration_months);
    let periods = elapsed_periods(unlock_type, vesting_duration_months, elapsed);
    if periods >= total {
        // Exact at maturity, no rounding dust.
        return Ok(vested_token_amount);
    }
    let v = (vested_token_amount as u128)
        .checked_mul(periods as u128)
        .ok_or(VestingError::MathOverflow)?
        / (total as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Total unlocked to date, regardless of what was already claimed.
pub fn unlocked_amount(
    pool: &VestingPool,
    beneficiary: &Beneficiary,
    listing_date: i64,
    now: i64,
) -> Result<u64, VestingError> {
    if now < listing_date {
        return Ok(0);
    }
    let cliff_end = cliff_end_date(listing_date, pool.cliff_days)?;
    if now < cliff_end {
        return Ok(beneficiary.listing_token_amount);
    }

    let elapsed = now
        .checked_sub(cliff_end)
        .ok_or(VestingError::MathOverflow)?;
    let vested = vested_unlocked(
        beneficiary.vested_token_amount,
        pool.unlock_type,
        pool.vesting_duration_months,
        elapsed,
    )?;

    beneficiary
        .listing_token_amount
        .checked_add(beneficiary.cliff_token_amount)
        .and_then(|v| v.checked_add(vested))
        .ok_or(VestingError::MathOverflow)
}
