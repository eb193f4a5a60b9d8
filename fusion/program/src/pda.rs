use anchor_lang::prelude::Pubkey;

use crate::{constants::AUTHORITY_SEED, id};

pub fn find_output_authority_address(formula: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED.as_bytes(), formula.as_ref()], &id())
}
