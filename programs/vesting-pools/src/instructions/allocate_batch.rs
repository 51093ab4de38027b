use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::instructions::BeneficiaryAllocated;
use crate::state::VestingConfig;
use crate::utils::pda;

/// Allocates to many wallets at once. Beneficiary PDAs are passed as
/// writable `remaining_accounts`, one per wallet, in the same order.
///
/// The whole batch is checked against pool capacity before anything is
/// written, so either every entry applies or none does. An empty batch
/// changes nothing.
pub fn allocate_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, AllocateBatch<'info>>,
    pool_index: u32,
    wallets: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let cfg = &ctx.accounts.vesting_config;
    cfg.ensure_owner(&ctx.accounts.owner.key())?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let mut pool = pda::load_pool(&pool_info, &cfg.key(), pool_index)?;

    let writable: Vec<bool> = ctx
        .remaining_accounts
        .iter()
        .map(|info| info.is_writable)
        .collect();
    let batch_total = pool.check_batch(&wallets, &amounts, &writable)?;

    let owner_info = ctx.accounts.owner.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    // Entries are written back one by one so a wallet listed twice
    // accumulates like two separate allocations.
    for ((wallet, amount), info) in wallets
        .iter()
        .zip(amounts.iter())
        .zip(ctx.remaining_accounts.iter())
    {
        let (mut beneficiary, fresh) =
            pda::load_or_new_beneficiary(info, pool_info.key, wallet)?;

        pool.allocate(&mut beneficiary, *amount)?;

        if fresh {
            pda::create_beneficiary_account(info, &owner_info, &system_info, &beneficiary)?;
        }
        pda::store_program_account(info, &beneficiary)?;

        emit!(BeneficiaryAllocated {
            pool_index,
            wallet: *wallet,
            amount: *amount,
            total_tokens: beneficiary.total_tokens,
            listing_token_amount: beneficiary.listing_token_amount,
            cliff_token_amount: beneficiary.cliff_token_amount,
            vested_token_amount: beneficiary.vested_token_amount,
            locked_pool_tokens: pool.locked_pool_tokens,
        });
    }

    pda::store_program_account(&pool_info, &pool)?;

    emit!(BatchAllocated {
        pool_index,
        count: wallets.len() as u8,
        amount: batch_total,
        locked_pool_tokens: pool.locked_pool_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AllocateBatch<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler (missing => `PoolNotFound`).
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BatchAllocated {
    pub pool_index: u32,
    pub count: u8,
    pub amount: u64,
    pub locked_pool_tokens: u64,
}
