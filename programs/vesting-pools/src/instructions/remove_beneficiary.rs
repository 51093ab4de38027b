use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::VestingConfig;
use crate::utils::pda;

/// Deletes a beneficiary and returns its unclaimed remainder to pool capacity.
pub fn remove_beneficiary(
    ctx: Context<RemoveBeneficiary>,
    pool_index: u32,
    wallet: Pubkey,
) -> Result<()> {
    let cfg = &ctx.accounts.vesting_config;
    cfg.ensure_owner(&ctx.accounts.owner.key())?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let mut pool = pda::load_pool(&pool_info, &cfg.key(), pool_index)?;

    let beneficiary_info = ctx.accounts.beneficiary.to_account_info();
    let beneficiary = pda::load_beneficiary(&beneficiary_info, pool_info.key, &wallet)?
        .ok_or(VestingError::NotWhitelisted)?;

    let released = pool.release(&beneficiary)?;

    pda::store_program_account(&pool_info, &pool)?;
    pda::close_program_account(&beneficiary_info, &ctx.accounts.owner.to_account_info())?;

    msg!(
        "Removed beneficiary {} from pool {}: {} tokens back to capacity",
        wallet,
        pool_index,
        released
    );
    emit!(BeneficiaryRemoved {
        pool_index,
        wallet,
        released_capacity: released,
        claimed_token_amount: beneficiary.claimed_token_amount,
        locked_pool_tokens: pool.locked_pool_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveBeneficiary<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler (missing => `PoolNotFound`).
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Beneficiary PDA for (pool, wallet), verified in-handler (missing => `NotWhitelisted`).
    #[account(mut)]
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryRemoved {
    pub pool_index: u32,
    pub wallet: Pubkey,
    pub released_capacity: u64,
    pub claimed_token_amount: u64,
    pub locked_pool_tokens: u64,
}
