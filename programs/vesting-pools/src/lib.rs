use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;


pub use instructions::*;
use state::PoolParams;

declare_id!("CpCswGoK23Y8CzdkKwfZyuSvRrNyxZsoCNKRWWVWDGMR");

#[program]
pub mod vesting_pools {
    use super::*;

    /// One-time setup: binds the mint, creates the vault and fixes the listing date.
    pub fn initialize(ctx: Context<Initialize>, listing_date: i64) -> Result<()> {
        instructions::initialize(ctx, listing_date)
    }

    pub fn create_pool(ctx: Context<CreatePool>, params: PoolParams) -> Result<u32> {
        instructions::create_pool(ctx, params)
    }

    pub fn allocate(
        ctx: Context<Allocate>,
        pool_index: u32,
        wallet: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::allocate(ctx, pool_index, wallet, amount)
    }

    /// Beneficiary PDAs go in `remaining_accounts`, in wallet order.
    pub fn allocate_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, AllocateBatch<'info>>,
        pool_index: u32,
        wallets: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::allocate_batch(ctx, pool_index, wallets, amounts)
    }

    pub fn claim(ctx: Context<Claim>, pool_index: u32) -> Result<()> {
        instructions::claim(ctx, pool_index)
    }

    pub fn remove_beneficiary(
        ctx: Context<RemoveBeneficiary>,
        pool_index: u32,
        wallet: Pubkey,
    ) -> Result<()> {
        instructions::remove_beneficiary(ctx, pool_index, wallet)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn unlocked_token_amount(
        ctx: Context<UnlockedTokenAmount>,
        pool_index: u32,
        wallet: Pubkey,
    ) -> Result<u64> {
        instructions::unlocked_token_amount(ctx, pool_index, wallet)
    }

    pub fn total_unclaimed_pool_tokens(
        ctx: Context<TotalUnclaimedPoolTokens>,
        pool_index: u32,
    ) -> Result<u64> {
        instructions::total_unclaimed_pool_tokens(ctx, pool_index)
    }
}
