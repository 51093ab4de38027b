use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::VestingConfig;
use crate::utils::pda;
use crate::utils::clock::{ClusterClock, TimeSource};

/// Unlocked amount for `wallet` at the current cluster time (0 when not whitelisted).
pub fn unlocked_token_amount(
    ctx: Context<UnlockedTokenAmount>,
    pool_index: u32,
    wallet: Pubkey,
) -> Result<u64> {
    let cfg = &ctx.accounts.vesting_config;
    let pool_info = ctx.accounts.pool.to_account_info();
    let pool = pda::load_pool(&pool_info, &cfg.key(), pool_index)?;

    let now = ClusterClock.now()?;
    let beneficiary_info = ctx.accounts.beneficiary.to_account_info();
    let (unlocked, claimed) =
        match pda::load_beneficiary(&beneficiary_info, pool_info.key, &wallet)? {
            Some(b) => (
                b.unlocked_amount(&pool, cfg.listing_date, now)?,
                b.claimed_token_amount,
            ),
            None => (0, 0),
        };

    emit!(UnlockQuote {
        pool_index,
        wallet,
        now,
        unlocked_amount: unlocked,
        claimed_amount: claimed,
        claimable: unlocked.saturating_sub(claimed),
    });

    Ok(unlocked)
}

#[derive(Accounts)]
pub struct UnlockedTokenAmount<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler.
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Beneficiary PDA for (pool, wallet), verified in-handler; may be absent.
    pub beneficiary: UncheckedAccount<'info>,
}

#[event]
pub struct UnlockQuote {
    pub pool_index: u32,
    pub wallet: Pubkey,
    pub now: i64,
    pub unlocked_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
