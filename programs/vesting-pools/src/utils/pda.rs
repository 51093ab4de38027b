//! Manual load/store for pool and beneficiary PDAs.
//!
//! These accounts are passed unchecked so that a missing pool or beneficiary
//! surfaces as `PoolNotFound` / `NotWhitelisted` instead of a generic
//! deserialization failure, and so batch allocation can create records from
//! `remaining_accounts`.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::BENEFICIARY_SEED;
use crate::error::VestingError;
use crate::state::{Beneficiary, VestingPool};

/// `None` when the account was never created or has been closed.
pub fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

pub fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    value.try_serialize(&mut &mut data[..])?;
    Ok(())
}

pub fn load_pool(info: &AccountInfo, config: &Pubkey, pool_index: u32) -> Result<VestingPool> {
    let (expected, _) = VestingPool::address(config, pool_index);
    require_keys_eq!(*info.key, expected, VestingError::PoolNotFound);
    let pool = load_program_account::<VestingPool>(info)?.ok_or(VestingError::PoolNotFound)?;
    require!(pool.index == pool_index, VestingError::PoolNotFound);
    Ok(pool)
}

pub fn load_beneficiary(
    info: &AccountInfo,
    pool: &Pubkey,
    wallet: &Pubkey,
) -> Result<Option<Beneficiary>> {
    let (expected, _) = Beneficiary::address(pool, wallet);
    require_keys_eq!(*info.key, expected, VestingError::InvalidBeneficiaryAccount);
    Ok(load_program_account::<Beneficiary>(info)?.filter(|b| b.is_whitelisted))
}

/// Existing record, or a fresh one (`true`) whose account still has to be created.
pub fn load_or_new_beneficiary(
    info: &AccountInfo,
    pool: &Pubkey,
    wallet: &Pubkey,
) -> Result<(Beneficiary, bool)> {
    match load_beneficiary(info, pool, wallet)? {
        Some(b) => Ok((b, false)),
        None => {
            let (_, bump) = Beneficiary::address(pool, wallet);
            Ok((Beneficiary::new(*pool, *wallet, bump), true))
        }
    }
}

/// Creates the beneficiary PDA, topping up an address that already holds lamports.
pub fn create_beneficiary_account<'info>(
    info: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    beneficiary: &Beneficiary,
) -> Result<()> {
    let space = 8 + Beneficiary::SIZE;
    let rent = Rent::get()?.minimum_balance(space);
    let bump = [beneficiary.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        BENEFICIARY_SEED,
        beneficiary.pool.as_ref(),
        beneficiary.wallet.as_ref(),
        &bump,
    ]];

    let current = info.lamports();
    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: info.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.clone(),
                Transfer {
                    from: payer.clone(),
                    to: info.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system.clone(),
            Allocate {
                account_to_allocate: info.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system.clone(),
            Assign {
                account_to_assign: info.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

/// Closes a program account, sending its lamports to `destination`.
pub fn close_program_account<'info>(
    info: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let refunded = destination
        .lamports()
        .checked_add(info.lamports())
        .ok_or(VestingError::MathOverflow)?;
    **destination.try_borrow_mut_lamports()? = refunded;
    **info.try_borrow_mut_lamports()? = 0;
    info.assign(&system_program::ID);
    info.resize(0)?;
    Ok(())
}
