use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{
    DAYS_PER_MONTH, MAX_BATCH_ALLOCATION, MAX_POOL_NAME_LEN, POOL_SEED, SECONDS_PER_DAY,
};
use crate::error::VestingError;
use crate::state::{
    ensure_wallet, ensure_within_whole, split_entitlement, Beneficiary, PercentageFraction,
};
use crate::utils::unlock;

/// Staging granularity of the post-cliff vesting tranche.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockType {
    Daily,
    Monthly,
}

impl UnlockType {
    /// Length of one unlock period in seconds.
    pub const fn period_seconds(self) -> i64 {
        match self {
            UnlockType::Daily => SECONDS_PER_DAY,
            UnlockType::Monthly => DAYS_PER_MONTH as i64 * SECONDS_PER_DAY,
        }
    }

    /// Number of unlock periods in a vesting duration.
    pub const fn total_periods(self, vesting_duration_months: u32) -> u64 {
        match self {
            UnlockType::Daily => vesting_duration_months as u64 * DAYS_PER_MONTH as u64,
            UnlockType::Monthly => vesting_duration_months as u64,
        }
    }
}

/// Pool schedule supplied to `create_pool`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub name: String,
    pub listing_fraction: PercentageFraction,
    pub cliff_days: u32,
    pub cliff_fraction: PercentageFraction,
    pub vesting_duration_months: u32,
    pub unlock_type: UnlockType,
    pub total_pool_token_amount: u64,
}

impl PoolParams {
    pub fn validate(&self) -> Result<(), VestingError> {
        ensure_within_whole(&self.listing_fraction, &self.cliff_fraction)?;
        if self.name.len() > MAX_POOL_NAME_LEN {
            return Err(VestingError::PoolNameTooLong);
        }
        if self.vesting_duration_months == 0 {
            return Err(VestingError::InvalidVestingDuration);
        }
        Ok(())
    }
}

/// One vesting pool PDA. The schedule is immutable after creation; only
/// `locked_pool_tokens` changes.
#[account]
#[derive(Debug)]
pub struct VestingPool {
    pub config: Pubkey,
    pub index: u32,
    pub name: String,
    pub listing_fraction: PercentageFraction,
    pub cliff_days: u32,
    pub cliff_fraction: PercentageFraction,
    pub vesting_duration_months: u32,
    pub unlock_type: UnlockType,
    /// Capacity ceiling.
    pub total_pool_token_amount: u64,
    /// Active entitlements plus whatever removed beneficiaries had already claimed.
    pub locked_pool_tokens: u64,
    pub bump: u8,
}

impl VestingPool {
    pub const SIZE: usize =
        32 +                            // config
        4 +                             // index
        4 + MAX_POOL_NAME_LEN +         // name
        PercentageFraction::SIZE +      // listing_fraction
        4 +                             // cliff_days
        PercentageFraction::SIZE +      // cliff_fraction
        4 +                             // vesting_duration_months
        1 +                             // unlock_type
        8 +                             // total_pool_token_amount
        8 +                             // locked_pool_tokens
        1;                              // bump

    pub fn address(config: &Pubkey, index: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POOL_SEED, config.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn from_params(
        config: Pubkey,
        index: u32,
        params: PoolParams,
        bump: u8,
    ) -> Result<Self, VestingError> {
        params.validate()?;
        Ok(Self {
            config,
            index,
            name: params.name,
            listing_fraction: params.listing_fraction,
            cliff_days: params.cliff_days,
            cliff_fraction: params.cliff_fraction,
            vesting_duration_months: params.vesting_duration_months,
            unlock_type: params.unlock_type,
            total_pool_token_amount: params.total_pool_token_amount,
            locked_pool_tokens: 0,
            bump,
        })
    }

    pub fn vesting_duration_days(&self) -> u64 {
        self.vesting_duration_months as u64 * DAYS_PER_MONTH as u64
    }

    pub fn cliff_end_date(&self, listing_date: i64) -> Result<i64, VestingError> {
        unlock::cliff_end_date(listing_date, self.cliff_days)
    }

    pub fn vesting_end_date(&self, listing_date: i64) -> Result<i64, VestingError> {
        unlock::vesting_end_date(listing_date, self.cliff_days, self.vesting_duration_months)
    }

    /// Capacity still available for new allocations.
    pub fn unclaimed_capacity(&self) -> u64 {
        self.total_pool_token_amount
            .saturating_sub(self.locked_pool_tokens)
    }

    fn ensure_capacity(&self, amount: u64) -> Result<u64, VestingError> {
        if amount == 0 {
            return Err(VestingError::ZeroAmount);
        }
        let locked = self
            .locked_pool_tokens
            .checked_add(amount)
            .ok_or(VestingError::CapacityExceeded)?;
        if locked > self.total_pool_token_amount {
            return Err(VestingError::CapacityExceeded);
        }
        Ok(locked)
    }

    /// Checks a whole batch against the current counter without touching it.
    /// Returns the batch total.
    pub fn ensure_batch_capacity(&self, amounts: &[u64]) -> Result<u64, VestingError> {
        let mut sum: u64 = 0;
        for amount in amounts {
            if *amount == 0 {
                return Err(VestingError::ZeroAmount);
            }
            sum = sum
                .checked_add(*amount)
                .ok_or(VestingError::CapacityExceeded)?;
        }
        // An empty batch allocates nothing.
        if sum > 0 {
            self.ensure_capacity(sum)?;
        }
        Ok(sum)
    }

    /// Checks a whole batch request before any entry is applied and returns
    /// its total. `accounts_writable` carries one flag per beneficiary
    /// account passed alongside, in wallet order.
    pub fn check_batch(
        &self,
        wallets: &[Pubkey],
        amounts: &[u64],
        accounts_writable: &[bool],
    ) -> Result<u64, VestingError> {
        if wallets.len() != amounts.len() || accounts_writable.len() != wallets.len() {
            return Err(VestingError::LengthMismatch);
        }
        if wallets.len() > MAX_BATCH_ALLOCATION {
            return Err(VestingError::BatchTooLarge);
        }
        wallets.iter().try_for_each(ensure_wallet)?;
        if accounts_writable.iter().any(|writable| !writable) {
            return Err(VestingError::InvalidBeneficiaryAccount);
        }
        self.ensure_batch_capacity(amounts)
    }

    /// Commits `amount` of capacity to `beneficiary` and recomputes its split.
    pub fn allocate(
        &mut self,
        beneficiary: &mut Beneficiary,
        amount: u64,
    ) -> Result<(), VestingError> {
        let locked = self.ensure_capacity(amount)?;
        let total = beneficiary
            .total_tokens
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let split = split_entitlement(total, &self.listing_fraction, &self.cliff_fraction)?;

        self.locked_pool_tokens = locked;
        beneficiary.set_entitlement(total, split);
        Ok(())
    }

    /// Gives the beneficiary's unclaimed remainder back to the pool.
    /// Already claimed tokens stay counted. Returns the released capacity.
    pub fn release(&mut self, beneficiary: &Beneficiary) -> Result<u64, VestingError> {
        let remainder = beneficiary.unclaimed_remainder()?;
        self.locked_pool_tokens = self
            .locked_pool_tokens
            .checked_sub(remainder)
            .ok_or(VestingError::MathOverflow)?;
        Ok(remainder)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn params(unlock_type: UnlockType, total: u64) -> PoolParams {
        PoolParams {
            name: "Test1".to_string(),
            listing_fraction: PercentageFraction::new(1, 20),
            cliff_days: 1,
            cliff_fraction: PercentageFraction::new(1, 10),
            vesting_duration_months: 3,
            unlock_type,
            total_pool_token_amount: total,
        }
    }

    fn pool(total: u64) -> VestingPool {
        VestingPool::from_params(Pubkey::new_unique(), 0, params(UnlockType::Monthly, total), 255)
            .unwrap()
    }

    #[test]
    fn derived_dates() {
        let p = pool(1_000);
        assert_eq!(p.cliff_end_date(1_000_000).unwrap(), 1_000_000 + 86_400);
        assert_eq!(p.vesting_duration_days(), 90);
        assert_eq!(
            p.vesting_end_date(1_000_000).unwrap(),
            1_000_000 + 86_400 + 90 * 86_400
        );
    }

    #[test]
    fn invalid_params_rejected() {
        let mut bad = params(UnlockType::Monthly, 1);
        bad.listing_fraction = PercentageFraction::new(1, 0);
        assert!(matches!(bad.validate(), Err(VestingError::InvalidPercentageDivisor)));

        let mut bad = params(UnlockType::Monthly, 1);
        bad.listing_fraction = PercentageFraction::new(2, 1);
        bad.cliff_fraction = PercentageFraction::new(1, 1);
        assert!(matches!(bad.validate(), Err(VestingError::PercentageOverflow)));

        let mut bad = params(UnlockType::Monthly, 1);
        bad.name = "x".repeat(MAX_POOL_NAME_LEN + 1);
        assert!(matches!(bad.validate(), Err(VestingError::PoolNameTooLong)));

        let mut bad = params(UnlockType::Daily, 1);
        bad.vesting_duration_months = 0;
        assert!(matches!(bad.validate(), Err(VestingError::InvalidVestingDuration)));
    }

    #[test]
    fn allocation_respects_capacity() {
        let mut p = pool(300);
        let mut a = Beneficiary::new(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        assert!(matches!(p.allocate(&mut a, 0), Err(VestingError::ZeroAmount)));
        p.allocate(&mut a, 200).unwrap();
        assert!(matches!(p.allocate(&mut a, 101), Err(VestingError::CapacityExceeded)));
        // Failed allocation leaves both sides untouched.
        assert_eq!(p.locked_pool_tokens, 200);
        assert_eq!(a.total_tokens, 200);
        p.allocate(&mut a, 100).unwrap();
        assert_eq!(p.locked_pool_tokens, 300);
        assert_eq!(p.unclaimed_capacity(), 0);
    }

    #[test]
    fn batch_capacity_is_checked_as_a_whole() {
        let p = pool(300);
        assert_eq!(p.ensure_batch_capacity(&[100, 200]).unwrap(), 300);
        assert!(matches!(
            p.ensure_batch_capacity(&[200, 200]),
            Err(VestingError::CapacityExceeded)
        ));
        assert!(matches!(
            p.ensure_batch_capacity(&[u64::MAX, 1]),
            Err(VestingError::CapacityExceeded)
        ));
        assert!(matches!(
            p.ensure_batch_capacity(&[100, 0]),
            Err(VestingError::ZeroAmount)
        ));
        assert_eq!(p.ensure_batch_capacity(&[]).unwrap(), 0);
    }

    #[test]
    fn batch_request_shape_is_checked() {
        let p = pool(1_000);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert_eq!(p.check_batch(&[], &[], &[]).unwrap(), 0);
        assert_eq!(p.check_batch(&[a, b], &[10, 20], &[true, true]).unwrap(), 30);
        assert!(matches!(
            p.check_batch(&[a, b], &[10], &[true, true]),
            Err(VestingError::LengthMismatch)
        ));
        assert!(matches!(
            p.check_batch(&[a, b], &[10, 20], &[true]),
            Err(VestingError::LengthMismatch)
        ));
        assert!(matches!(
            p.check_batch(&[a, Pubkey::default()], &[10, 20], &[true, true]),
            Err(VestingError::InvalidPubkey)
        ));
        assert!(matches!(
            p.check_batch(&[a, b], &[10, 20], &[true, false]),
            Err(VestingError::InvalidBeneficiaryAccount)
        ));

        let n = MAX_BATCH_ALLOCATION + 1;
        let wallets: Vec<Pubkey> = (0..n).map(|_| Pubkey::new_unique()).collect();
        assert!(matches!(
            p.check_batch(&wallets, &vec![1; n], &vec![true; n]),
            Err(VestingError::BatchTooLarge)
        ));
    }

    #[test]
    fn release_keeps_claimed_part() {
        let mut p = pool(1_000);
        let mut a = Beneficiary::new(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        p.allocate(&mut a, 199).unwrap();
        a.claimed_token_amount = 9;
        assert_eq!(p.release(&a).unwrap(), 190);
        assert_eq!(p.locked_pool_tokens, 9);
        assert_eq!(p.unclaimed_capacity(), 991);
    }

    #[test]
    fn period_selection() {
        assert_eq!(UnlockType::Daily.period_seconds(), 86_400);
        assert_eq!(UnlockType::Monthly.period_seconds(), 30 * 86_400);
        assert_eq!(UnlockType::Daily.total_periods(3), 90);
        assert_eq!(UnlockType::Monthly.total_periods(3), 3);
    }
}
