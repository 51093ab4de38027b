use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, POOL_SEED};
use crate::state::{PoolParams, UnlockType, VestingConfig, VestingPool};

/// Appends a pool under the next index and returns that index.
pub fn create_pool(ctx: Context<CreatePool>, params: PoolParams) -> Result<u32> {
    let config_key = ctx.accounts.vesting_config.key();
    let cfg = &mut ctx.accounts.vesting_config;
    cfg.ensure_owner(&ctx.accounts.owner.key())?;
    params.validate()?;

    let index = cfg.next_pool_index()?;
    let pool = VestingPool::from_params(config_key, index, params, ctx.bumps.pool)?;

    emit!(PoolCreated {
        pool_index: index,
        name: pool.name.clone(),
        cliff_days: pool.cliff_days,
        vesting_duration_months: pool.vesting_duration_months,
        unlock_type: pool.unlock_type,
        total_pool_token_amount: pool.total_pool_token_amount,
    });

    ctx.accounts.pool.set_inner(pool);
    Ok(index)
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = owner,
        space = 8 + VestingPool::SIZE,
        seeds = [
            POOL_SEED,
            vesting_config.key().as_ref(),
            &vesting_config.pool_count.to_le_bytes()
        ],
        bump
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PoolCreated {
    pub pool_index: u32,
    pub name: String,
    pub cliff_days: u32,
    pub vesting_duration_months: u32,
    pub unlock_type: UnlockType,
    pub total_pool_token_amount: u64,
}
