use anchor_lang::prelude::*;
use solana_program::{
    program_memory::sol_memcmp,
    program_option::COption,
    program_pack::{IsInitialized, Pack},
    pubkey::PUBKEY_BYTES,
};
use std::slice::Iter;

use crate::FusionError;

pub fn cmp_pubkeys(a: &Pubkey, b: &Pubkey) -> bool {
    sol_memcmp(a.as_ref(), b.as_ref(), PUBKEY_BYTES) == 0
}

pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> Result<()> {
    if !cmp_pubkeys(account.owner, owner) {
        msg!(
            "owner assertion failed for {}: expected {}, got {}",
            account.key,
            owner,
            account.owner
        );
        return err!(FusionError::IncorrectOwner);
    }
    Ok(())
}

pub fn assert_initialized<T: Pack + IsInitialized>(account_info: &AccountInfo) -> Result<T> {
    let account: T = T::unpack_unchecked(&account_info.data.borrow())?;
    if !account.is_initialized() {
        return Err(ProgramError::UninitializedAccount.into());
    }
    Ok(account)
}

/// Unpacks an SPL token account after checking the token program owns it.
pub fn token_account(account_info: &AccountInfo) -> Result<spl_token::state::Account> {
    assert_owned_by(account_info, &spl_token::id())?;
    assert_initialized(account_info)
}

/// Unpacks an SPL mint after checking the token program owns it.
pub fn mint_account(account_info: &AccountInfo) -> Result<spl_token::state::Mint> {
    assert_owned_by(account_info, &spl_token::id())?;
    assert_initialized(account_info)
}

pub fn mint_authority_is(mint: &spl_token::state::Mint, authority: &Pubkey) -> bool {
    match mint.mint_authority {
        COption::Some(ref current) => cmp_pubkeys(current, authority),
        COption::None => false,
    }
}

/// Ordered cursor over the flat remaining-accounts list. Each consumer names
/// the error to raise when its slot is absent.
pub struct RemainingAccounts<'a, 'info> {
    iter: Iter<'a, AccountInfo<'info>>,
}

impl<'a, 'info> RemainingAccounts<'a, 'info> {
    pub fn new(accounts: &'a [AccountInfo<'info>]) -> Self {
        Self {
            iter: accounts.iter(),
        }
    }

    pub fn next_or(&mut self, missing: FusionError) -> Result<&'a AccountInfo<'info>> {
        self.iter.next().ok_or_else(|| error!(missing))
    }

    pub fn remaining(&self) -> usize {
        self.iter.len()
    }

    /// Fails when accounts are left over after every slot was consumed.
    pub fn finish(self) -> Result<()> {
        if self.iter.len() != 0 {
            msg!("{} unexpected remaining accounts", self.iter.len());
            return err!(FusionError::InvalidRemainingAccountsLength);
        }
        Ok(())
    }
}
