use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::{ensure_wallet, VestingConfig};
use crate::utils::pda;

pub fn allocate(ctx: Context<Allocate>, pool_index: u32, wallet: Pubkey, amount: u64) -> Result<()> {
    let cfg = &ctx.accounts.vesting_config;
    cfg.ensure_owner(&ctx.accounts.owner.key())?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let mut pool = pda::load_pool(&pool_info, &cfg.key(), pool_index)?;
    ensure_wallet(&wallet)?;

    let beneficiary_info = ctx.accounts.beneficiary.to_account_info();
    let (mut beneficiary, fresh) =
        pda::load_or_new_beneficiary(&beneficiary_info, pool_info.key, &wallet)?;

    pool.allocate(&mut beneficiary, amount)?;

    if fresh {
        pda::create_beneficiary_account(
            &beneficiary_info,
            &ctx.accounts.owner.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            &beneficiary,
        )?;
    }
    pda::store_program_account(&beneficiary_info, &beneficiary)?;
    pda::store_program_account(&pool_info, &pool)?;

    emit!(BeneficiaryAllocated {
        pool_index,
        wallet,
        amount,
        total_tokens: beneficiary.total_tokens,
        listing_token_amount: beneficiary.listing_token_amount,
        cliff_token_amount: beneficiary.cliff_token_amount,
        vested_token_amount: beneficiary.vested_token_amount,
        locked_pool_tokens: pool.locked_pool_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Allocate<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler (missing => `PoolNotFound`).
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Beneficiary PDA for (pool, wallet), verified in-handler; created on first allocation.
    #[account(mut)]
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryAllocated {
    pub pool_index: u32,
    pub wallet: Pubkey,
    pub amount: u64,
    pub total_tokens: u64,
    pub listing_token_amount: u64,
    pub cliff_token_amount: u64,
    pub vested_token_amount: u64,
    pub locked_pool_tokens: u64,
}
