use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::VestingConfig;
use crate::utils::pda;

/// Capacity of the pool not yet committed to any beneficiary.
pub fn total_unclaimed_pool_tokens(
    ctx: Context<TotalUnclaimedPoolTokens>,
    pool_index: u32,
) -> Result<u64> {
    let cfg = &ctx.accounts.vesting_config;
    let pool = pda::load_pool(&ctx.accounts.pool.to_account_info(), &cfg.key(), pool_index)?;
    let unclaimed = pool.unclaimed_capacity();

    emit!(PoolCapacityQuote {
        pool_index,
        total_pool_token_amount: pool.total_pool_token_amount,
        locked_pool_tokens: pool.locked_pool_tokens,
        unclaimed_pool_tokens: unclaimed,
    });

    Ok(unclaimed)
}

#[derive(Accounts)]
pub struct TotalUnclaimedPoolTokens<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler.
    pub pool: UncheckedAccount<'info>,
}

#[event]
pub struct PoolCapacityQuote {
    pub pool_index: u32,
    pub total_pool_token_amount: u64,
    pub locked_pool_tokens: u64,
    pub unclaimed_pool_tokens: u64,
}
