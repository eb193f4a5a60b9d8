use anchor_lang::prelude::*;
use mpl_token_metadata::{
    instruction::mint_new_edition_from_master_edition_via_token,
    utils::get_supply_off_master_edition,
};
use solana_program::program::invoke_signed;

use crate::{
    authority::OutputAuthority,
    outputs::{CollectibleAccounts, PrintEditionAccounts},
    FusionError,
};

/// Accounts of the outer `craft` instruction the print CPI needs.
pub struct PrintEditionParams<'a> {
    /// crafter: pays for the new accounts and signs as new mint authority
    pub payer: AccountInfo<'a>,
    pub authority_info: AccountInfo<'a>,
    pub token_program: AccountInfo<'a>,
    pub system_program: AccountInfo<'a>,
    pub rent: AccountInfo<'a>,
}

/// Prints the next edition of the master held in custody. The output
/// authority signs as owner of the custody account and becomes update
/// authority of the new metadata.
pub fn mint_new_edition_cpi<'info>(
    slot: &CollectibleAccounts<'_, 'info>,
    edition: &PrintEditionAccounts<'_, 'info>,
    params: PrintEditionParams<'info>,
    authority: &OutputAuthority,
) -> Result<u64> {
    let PrintEditionParams {
        payer,
        authority_info,
        token_program,
        system_program,
        rent,
    } = params;

    let edition_number = get_supply_off_master_edition(edition.master_edition)?
        .checked_add(1)
        .ok_or(FusionError::NumericalOverflow)?;

    let ix = mint_new_edition_from_master_edition_via_token(
        *edition.token_metadata_program.key,
        *edition.new_metadata.key,
        *edition.new_edition.key,
        *edition.master_edition.key,
        *edition.new_mint.key,
        *payer.key,
        *payer.key,
        *authority.address(),
        *slot.custody.key,
        *authority.address(),
        *edition.master_metadata.key,
        *slot.mint.key,
        edition_number,
    );

    invoke_signed(
        &ix,
        &[
            edition.token_metadata_program.clone(),
            edition.new_metadata.clone(),
            edition.new_edition.clone(),
            edition.master_edition.clone(),
            edition.new_mint.clone(),
            edition.edition_marker.clone(),
            payer,
            authority_info,
            slot.custody.clone(),
            edition.master_metadata.clone(),
            token_program,
            system_program,
            rent,
        ],
        &[&authority.signer_seeds()],
    )?;

    Ok(edition_number)
}
