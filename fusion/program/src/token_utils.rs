use anchor_lang::prelude::*;
use solana_program::program::{invoke, invoke_signed};
use spl_token::instruction::AuthorityType;

use crate::{authority::OutputAuthority, utils::cmp_pubkeys, FusionError};

/// TokenBurnParams
pub struct TokenBurnParams<'a> {
    /// mint
    /// CHECK: account checked in CPI
    pub mint: AccountInfo<'a>,
    /// source
    /// CHECK: account checked in CPI
    pub source: AccountInfo<'a>,
    /// amount
    pub amount: u64,
    /// owner of `source`, signer of the outer instruction
    /// CHECK: account checked in CPI
    pub authority: AccountInfo<'a>,
    /// token_program
    /// CHECK: account checked in CPI
    pub token_program: AccountInfo<'a>,
}

pub fn spl_token_burn(params: TokenBurnParams<'_>) -> Result<()> {
    let TokenBurnParams {
        mint,
        source,
        amount,
        authority,
        token_program,
    } = params;

    invoke(
        &spl_token::instruction::burn(
            token_program.key,
            source.key,
            mint.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source, mint, authority, token_program],
    )?;
    Ok(())
}

/// TokenTransferParams for transfers signed by the outer instruction signer.
pub struct TokenTransferParams<'a> {
    /// CHECK: account checked in CPI
    pub source: AccountInfo<'a>,
    /// CHECK: account checked in CPI
    pub destination: AccountInfo<'a>,
    pub amount: u64,
    /// CHECK: account checked in CPI
    pub authority: AccountInfo<'a>,
    /// CHECK: account checked in CPI
    pub token_program: AccountInfo<'a>,
}

pub fn spl_token_transfer(params: TokenTransferParams<'_>) -> Result<()> {
    let TokenTransferParams {
        source,
        destination,
        amount,
        authority,
        token_program,
    } = params;

    invoke(
        &spl_token::instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source, destination, authority, token_program],
    )?;
    Ok(())
}

/// Hands the mint authority of `mint` from the current signer over to the
/// formula's output authority.
pub fn spl_token_set_mint_authority<'a>(
    mint: AccountInfo<'a>,
    current_authority: AccountInfo<'a>,
    new_authority: &OutputAuthority,
    token_program: AccountInfo<'a>,
) -> Result<()> {
    invoke(
        &spl_token::instruction::set_authority(
            token_program.key,
            mint.key,
            Some(new_authority.address()),
            AuthorityType::MintTokens,
            current_authority.key,
            &[],
        )?,
        &[mint, current_authority, token_program],
    )?;
    Ok(())
}

/// Accounts for a token movement signed by the output authority.
pub struct AuthorityTokenParams<'a> {
    /// mint for `mint_to`, custody account for `transfer`
    /// CHECK: account checked in CPI
    pub source: AccountInfo<'a>,
    /// CHECK: account checked in CPI
    pub destination: AccountInfo<'a>,
    pub amount: u64,
    /// the output authority PDA
    /// CHECK: checked against the capability
    pub authority_info: AccountInfo<'a>,
    /// CHECK: account checked in CPI
    pub token_program: AccountInfo<'a>,
}

fn assert_authority_account(authority: &OutputAuthority, info: &AccountInfo) -> Result<()> {
    if !cmp_pubkeys(authority.address(), info.key) {
        return err!(FusionError::AuthorityMismatch);
    }
    Ok(())
}

pub fn spl_token_mint_to_as_authority(
    params: AuthorityTokenParams<'_>,
    authority: &OutputAuthority,
) -> Result<()> {
    let AuthorityTokenParams {
        source: mint,
        destination,
        amount,
        authority_info,
        token_program,
    } = params;
    assert_authority_account(authority, &authority_info)?;

    invoke_signed(
        &spl_token::instruction::mint_to(
            token_program.key,
            mint.key,
            destination.key,
            authority_info.key,
            &[],
            amount,
        )?,
        &[mint, destination, authority_info, token_program],
        &[&authority.signer_seeds()],
    )?;
    Ok(())
}

pub fn spl_token_transfer_as_authority(
    params: AuthorityTokenParams<'_>,
    authority: &OutputAuthority,
) -> Result<()> {
    let AuthorityTokenParams {
        source,
        destination,
        amount,
        authority_info,
        token_program,
    } = params;
    assert_authority_account(authority, &authority_info)?;

    invoke_signed(
        &spl_token::instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            authority_info.key,
            &[],
            amount,
        )?,
        &[source, destination, authority_info, token_program],
        &[&authority.signer_seeds()],
    )?;
    Ok(())
}
