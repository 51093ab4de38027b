use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;

/// Singleton program configuration PDA.
#[account]
#[derive(Debug)]
pub struct VestingConfig {
    /// Owner authority; the only signer allowed to mutate pools and beneficiaries.
    pub owner: Pubkey,
    /// Token mint paid out by claims.
    pub mint: Pubkey,
    /// Program vault token account (authority = this PDA).
    pub vault: Pubkey,
    /// Listing date (Unix seconds, UTC). All schedules are measured from it.
    pub listing_date: i64,
    /// Number of pools created; also the next pool index.
    pub pool_count: u32,
    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        8 +  // listing_date
        4 +  // pool_count
        1 +  // bump
        1;   // vault_bump

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.owner {
            return Err(VestingError::NotAuthorized);
        }
        Ok(())
    }

    /// Hands the owner role to `new_owner` and returns the previous owner.
    /// The config PDA and the program itself can't sign, so neither may own.
    pub fn set_owner(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
        config_key: &Pubkey,
    ) -> Result<Pubkey, VestingError> {
        if new_owner == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        self.ensure_owner(caller)?;
        if new_owner == *config_key || new_owner == crate::ID {
            return Err(VestingError::InvalidConfig);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    pub fn contains_pool(&self, pool_index: u32) -> bool {
        pool_index < self.pool_count
    }

    /// Reserves the next pool index.
    pub fn next_pool_index(&mut self) -> Result<u32, VestingError> {
        let index = self.pool_count;
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(owner: Pubkey) -> VestingConfig {
        VestingConfig {
            owner,
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            listing_date: 1_000_000,
            pool_count: 0,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn only_owner_passes() {
        let owner = Pubkey::new_unique();
        let cfg = config(owner);
        assert!(cfg.ensure_owner(&owner).is_ok());
        assert!(matches!(
            cfg.ensure_owner(&Pubkey::new_unique()),
            Err(VestingError::NotAuthorized)
        ));
    }

    #[test]
    fn ownership_rejects_unsignable_keys() {
        let owner = Pubkey::new_unique();
        let config_key = Pubkey::new_unique();
        let mut cfg = config(owner);

        for bad in [config_key, crate::ID] {
            assert!(matches!(
                cfg.set_owner(&owner, bad, &config_key),
                Err(VestingError::InvalidConfig)
            ));
        }
        assert!(matches!(
            cfg.set_owner(&owner, Pubkey::default(), &config_key),
            Err(VestingError::InvalidPubkey)
        ));
        let next = Pubkey::new_unique();
        assert!(matches!(
            cfg.set_owner(&next, next, &config_key),
            Err(VestingError::NotAuthorized)
        ));
        assert_eq!(cfg.owner, owner);

        assert_eq!(cfg.set_owner(&owner, next, &config_key).unwrap(), owner);
        assert_eq!(cfg.owner, next);
    }

    #[test]
    fn pool_indices_are_sequential() {
        let mut cfg = config(Pubkey::new_unique());
        assert!(!cfg.contains_pool(0));
        assert_eq!(cfg.next_pool_index().unwrap(), 0);
        assert_eq!(cfg.next_pool_index().unwrap(), 1);
        assert!(cfg.contains_pool(1));
        assert!(!cfg.contains_pool(2));
    }
}
