use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::VestingConfig;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let config_key = ctx.accounts.vesting_config.key();
    let caller = ctx.accounts.owner.key();
    let previous_owner = ctx
        .accounts
        .vesting_config
        .set_owner(&caller, new_owner, &config_key)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
