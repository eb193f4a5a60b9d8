//! The output authority: a PDA derived from a formula that holds the mint
//! authority of every fungible output and owns the custody accounts of
//! collectible outputs.
//!
//! An [`OutputAuthority`] value can only be obtained through [`OutputAuthority::establish`]
//! or [`OutputAuthority::verify`], so any function taking one as a parameter
//! runs on a path where the derivation has already been checked.

use anchor_lang::prelude::*;

use crate::{constants::AUTHORITY_SEED, utils::cmp_pubkeys, FusionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputAuthority {
    formula: Pubkey,
    address: Pubkey,
    bump: [u8; 1],
}

impl OutputAuthority {
    /// Derives the authority for a new formula. The proposed bump is used
    /// when it yields a valid program address, otherwise the canonical bump
    /// is searched.
    pub fn establish(formula: &Pubkey, proposed_bump: u8, program_id: &Pubkey) -> Result<Self> {
        if let Ok(address) = Pubkey::create_program_address(
            &[AUTHORITY_SEED.as_bytes(), formula.as_ref(), &[proposed_bump]],
            program_id,
        ) {
            return Ok(Self {
                formula: *formula,
                address,
                bump: [proposed_bump],
            });
        }

        msg!("bump {} is not valid for {}, searching", proposed_bump, formula);
        let (address, bump) = Pubkey::try_find_program_address(
            &[AUTHORITY_SEED.as_bytes(), formula.as_ref()],
            program_id,
        )
        .ok_or_else(|| error!(FusionError::AddressDerivationExhausted))?;

        Ok(Self {
            formula: *formula,
            address,
            bump: [bump],
        })
    }

    /// Re-derives the authority of an existing formula and checks it against
    /// the bump supplied by the caller and the authority account passed in.
    pub fn verify(
        formula: &Pubkey,
        stored_bump: u8,
        supplied_bump: u8,
        supplied_authority: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Self> {
        if stored_bump != supplied_bump {
            msg!(
                "bump mismatch: formula stores {}, caller supplied {}",
                stored_bump,
                supplied_bump
            );
            return err!(FusionError::AuthorityMismatch);
        }

        let address = Pubkey::create_program_address(
            &[AUTHORITY_SEED.as_bytes(), formula.as_ref(), &[stored_bump]],
            program_id,
        )
        .map_err(|_| error!(FusionError::AuthorityMismatch))?;

        if !cmp_pubkeys(&address, supplied_authority) {
            msg!(
                "output authority mismatch: expected {}, got {}",
                address,
                supplied_authority
            );
            return err!(FusionError::AuthorityMismatch);
        }

        Ok(Self {
            formula: *formula,
            address,
            bump: [stored_bump],
        })
    }

    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    pub fn formula(&self) -> &Pubkey {
        &self.formula
    }

    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            AUTHORITY_SEED.as_bytes(),
            self.formula.as_ref(),
            &self.bump,
        ]
    }
}
