use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn initialize(ctx: Context<Initialize>, listing_date: i64) -> Result<()> {
    require!(listing_date > 0, VestingError::InvalidTimestamp);

    let cfg = &mut ctx.accounts.vesting_config;
    cfg.owner = ctx.accounts.owner.key();
    cfg.mint = ctx.accounts.mint.key();
    cfg.vault = ctx.accounts.vault.key();
    cfg.listing_date = listing_date;
    cfg.pool_count = 0;
    cfg.bump = ctx.bumps.vesting_config;
    cfg.vault_bump = ctx.bumps.vault;

    emit!(VestingInitialized {
        owner: cfg.owner,
        mint: cfg.mint,
        vault: cfg.vault,
        listing_date,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    // `init` fails on a second call: the config PDA already exists.
    #[account(
        init,
        payer = owner,
        space = 8 + VestingConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_config,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub listing_date: i64,
}
