use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;
use crate::utils::pda;
use crate::utils::clock::{ClusterClock, TimeSource};

/// Pays the signer everything unlocked since their last claim.
pub fn claim(ctx: Context<Claim>, pool_index: u32) -> Result<()> {
    let config_ai = ctx.accounts.vesting_config.to_account_info();
    let cfg = &ctx.accounts.vesting_config;
    let wallet = ctx.accounts.wallet.key();

    let pool_info = ctx.accounts.pool.to_account_info();
    let pool = pda::load_pool(&pool_info, &cfg.key(), pool_index)?;

    let beneficiary_info = ctx.accounts.beneficiary.to_account_info();
    let mut beneficiary = pda::load_beneficiary(&beneficiary_info, pool_info.key, &wallet)?
        .ok_or(VestingError::NotWhitelisted)?;

    require_keys_eq!(
        ctx.accounts.wallet_token_account.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.wallet_token_account.owner,
        wallet,
        VestingError::InvalidTokenAccount
    );

    let now = ClusterClock.now()?;
    let amount =
        beneficiary.settle_claim(&pool, cfg.listing_date, now, ctx.accounts.vault.amount)?;

    // Claimed total is written first; a failing transfer aborts the whole
    // instruction, so it never advances without the payout.
    pda::store_program_account(&beneficiary_info, &beneficiary)?;

    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[cfg.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.wallet_token_account.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensClaimed {
        pool_index,
        wallet,
        amount,
        claimed_total: beneficiary.claimed_token_amount,
        total_tokens: beneficiary.total_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: Pool PDA, loaded and verified in-handler (missing => `PoolNotFound`).
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Beneficiary PDA for (pool, wallet), verified in-handler (missing => `NotWhitelisted`).
    #[account(mut)]
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump = vesting_config.vault_bump,
        constraint = vault.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub wallet_token_account: Account<'info, TokenAccount>,

    pub wallet: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub pool_index: u32,
    pub wallet: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_tokens: u64,
}
