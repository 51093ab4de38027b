use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::BENEFICIARY_SEED;
use crate::error::VestingError;
use crate::state::{PercentageFraction, VestingPool};
use crate::utils::unlock;

/// Listing / cliff / vested split of one entitlement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSplit {
    pub listing: u64,
    pub cliff: u64,
    pub vested: u64,
}

/// Splits `total` with floor division; the vested tranche takes the rounding residue.
pub fn split_entitlement(
    total: u64,
    listing_fraction: &PercentageFraction,
    cliff_fraction: &PercentageFraction,
) -> Result<TokenSplit, VestingError> {
    let listing = listing_fraction.apply(total)?;
    let cliff = cliff_fraction.apply(total)?;
    let vested = total
        .checked_sub(listing)
        .and_then(|rest| rest.checked_sub(cliff))
        .ok_or(VestingError::PercentageOverflow)?;
    Ok(TokenSplit {
        listing,
        cliff,
        vested,
    })
}

/// Per (pool, wallet) entitlement record. The PDA exists only while the
/// wallet is whitelisted; removal closes it.
pub fn ensure_wallet(wallet: &Pubkey) -> Result<(), VestingError> {
    if *wallet == Pubkey::default() {
        return Err(VestingError::InvalidPubkey);
    }
    Ok(())
}

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Beneficiary {
    pub pool: Pubkey,
    pub wallet: Pubkey,
    pub is_whitelisted: bool,
    /// Sum of every allocation to this wallet in this pool.
    pub total_tokens: u64,
    pub listing_token_amount: u64,
    pub cliff_token_amount: u64,
    pub vested_token_amount: u64,
    /// Cumulative payout; never decreases, never exceeds `total_tokens`.
    pub claimed_token_amount: u64,
    pub bump: u8,
}

impl Beneficiary {
    pub const SIZE: usize =
        32 + // pool
        32 + // wallet
        1 +  // is_whitelisted
        8 +  // total_tokens
        8 +  // listing_token_amount
        8 +  // cliff_token_amount
        8 +  // vested_token_amount
        8 +  // claimed_token_amount
        1;   // bump

    pub fn address(pool: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[BENEFICIARY_SEED, pool.as_ref(), wallet.as_ref()],
            &crate::ID,
        )
    }

    pub fn new(pool: Pubkey, wallet: Pubkey, bump: u8) -> Self {
        Self {
            pool,
            wallet,
            bump,
            ..Self::default()
        }
    }

    pub(crate) fn set_entitlement(&mut self, total: u64, split: TokenSplit) {
        self.is_whitelisted = true;
        self.total_tokens = total;
        self.listing_token_amount = split.listing;
        self.cliff_token_amount = split.cliff;
        self.vested_token_amount = split.vested;
    }

    pub fn split(&self) -> TokenSplit {
        TokenSplit {
            listing: self.listing_token_amount,
            cliff: self.cliff_token_amount,
            vested: self.vested_token_amount,
        }
    }

    pub fn unlocked_amount(
        &self,
        pool: &VestingPool,
        listing_date: i64,
        now: i64,
    ) -> Result<u64, VestingError> {
        unlock::unlocked_amount(pool, self, listing_date, now)
    }

    /// Advances `claimed_token_amount` to the unlocked amount and returns the
    /// delta to pay out.
    /// Advances the claimed total to what has unlocked and returns the payout.
    /// Leaves the record untouched when nothing is due or the vault can't cover it.
    pub fn settle_claim(
        &mut self,
        pool: &VestingPool,
        listing_date: i64,
        now: i64,
        vault_balance: u64,
    ) -> Result<u64, VestingError> {
        let unlocked = self.unlocked_amount(pool, listing_date, now)?;
        if unlocked <= self.claimed_token_amount {
            return Err(VestingError::NothingClaimable);
        }
        let delta = unlocked - self.claimed_token_amount;
        if vault_balance < delta {
            return Err(VestingError::InsufficientVaultBalance);
        }
        self.claimed_token_amount = unlocked;
        Ok(delta)
    }

    pub fn unclaimed_remainder(&self) -> Result<u64, VestingError> {
        self.total_tokens
            .checked_sub(self.claimed_token_amount)
            .ok_or(VestingError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::pool::tests::params;
    use crate::state::UnlockType;

    const LISTING: i64 = 1_000_000;

    fn pool() -> VestingPool {
        VestingPool::from_params(
            Pubkey::new_unique(),
            0,
            params(UnlockType::Monthly, 10_000),
            255,
        )
        .unwrap()
    }

    #[test]
    fn split_absorbs_rounding_in_vested() {
        let listing = PercentageFraction::new(1, 20);
        let cliff = PercentageFraction::new(1, 10);
        let s = split_entitlement(199, &listing, &cliff).unwrap();
        assert_eq!(s, TokenSplit { listing: 9, cliff: 19, vested: 171 });
        let s = split_entitlement(200, &listing, &cliff).unwrap();
        assert_eq!(s, TokenSplit { listing: 10, cliff: 20, vested: 170 });
    }

    #[test]
    fn reallocation_recomputes_from_total() {
        let mut p = pool();
        let mut b = Beneficiary::new(p.config, Pubkey::new_unique(), 255);
        p.allocate(&mut b, 199).unwrap();
        p.allocate(&mut b, 199).unwrap();
        // Summing per-allocation floors would give 18/38/342.
        assert_eq!(b.total_tokens, 398);
        assert_eq!(b.split(), TokenSplit { listing: 19, cliff: 39, vested: 340 });
        assert!(b.is_whitelisted);
    }

    #[test]
    fn reallocation_keeps_claimed() {
        let mut p = pool();
        let mut b = Beneficiary::new(p.config, Pubkey::new_unique(), 255);
        p.allocate(&mut b, 200).unwrap();
        assert_eq!(b.settle_claim(&p, LISTING, LISTING + 1, u64::MAX).unwrap(), 10);
        p.allocate(&mut b, 100).unwrap();
        assert_eq!(b.total_tokens, 300);
        assert_eq!(b.split(), TokenSplit { listing: 15, cliff: 30, vested: 255 });
        assert_eq!(b.claimed_token_amount, 10);
        assert_eq!(b.settle_claim(&p, LISTING, LISTING + 1, u64::MAX).unwrap(), 5);
    }

    #[test]
    fn second_claim_without_progress_fails() {
        let mut p = pool();
        let mut b = Beneficiary::new(p.config, Pubkey::new_unique(), 255);
        p.allocate(&mut b, 199).unwrap();
        assert_eq!(b.settle_claim(&p, LISTING, LISTING + 1, u64::MAX).unwrap(), 9);
        let before = b.clone();
        assert!(matches!(
            b.settle_claim(&p, LISTING, LISTING + 1, u64::MAX),
            Err(VestingError::NothingClaimable)
        ));
        assert_eq!(b, before);
    }

    #[test]
    fn short_vault_leaves_claim_untouched() {
        let mut p = pool();
        let mut b = Beneficiary::new(p.config, Pubkey::new_unique(), 255);
        p.allocate(&mut b, 199).unwrap();
        assert!(matches!(
            b.settle_claim(&p, LISTING, LISTING + 1, 8),
            Err(VestingError::InsufficientVaultBalance)
        ));
        assert_eq!(b.claimed_token_amount, 0);
        assert_eq!(b.settle_claim(&p, LISTING, LISTING + 1, 9).unwrap(), 9);
    }

    #[test]
    fn default_wallet_is_rejected() {
        assert!(matches!(
            ensure_wallet(&Pubkey::default()),
            Err(VestingError::InvalidPubkey)
        ));
        assert!(ensure_wallet(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn nothing_before_listing() {
        let mut p = pool();
        let mut b = Beneficiary::new(p.config, Pubkey::new_unique(), 255);
        p.allocate(&mut b, 199).unwrap();
        assert!(matches!(
            b.settle_claim(&p, LISTING, 100, u64::MAX),
            Err(VestingError::NothingClaimable)
        ));
        assert_eq!(b.claimed_token_amount, 0);
    }
}
