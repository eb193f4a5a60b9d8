#![allow(clippy::result_large_err)]

pub mod authority;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod ingredients;
pub mod instructions;
pub mod outputs;
pub mod pda;
pub mod state;
pub mod token_metadata_utils;
pub mod token_utils;
pub mod utils;

use anchor_lang::prelude::*;
pub use errors::FusionError;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod fusion {
    use super::*;

    /// Create a formula with a fixed set of ingredients and output items.
    ///
    /// Every fungible output mint hands its mint authority to the formula's
    /// output authority, every collectible output moves its master unit into
    /// the custody account owned by that authority.
    pub fn create_formula<'info>(
        ctx: Context<'_, '_, '_, 'info, CreateFormula<'info>>,
        ingredient_count: u8,
        output_count: u8,
        ingredients: Vec<Ingredient>,
        output_items: Vec<OutputItem>,
        bump: u8, // Run `find_program_address` offchain for canonical bump
    ) -> Result<()> {
        instructions::create_formula::handler(
            ctx,
            ingredient_count,
            output_count,
            ingredients,
            output_items,
            bump,
        )
    }

    /// Take the ingredients of a formula from the signer and hand out its
    /// output items.
    pub fn craft<'info>(ctx: Context<'_, '_, '_, 'info, Craft<'info>>, bump: u8) -> Result<()> {
        instructions::craft::handler(ctx, bump)
    }
}

#[event]
pub struct FormulaCreated {
    pub formula: Pubkey,
    pub creator: Pubkey,
    pub output_authority: Pubkey,
    pub ingredients: u8,
    pub output_items: u8,
}

#[event]
pub struct FormulaCrafted {
    pub formula: Pubkey,
    pub crafter: Pubkey,
    pub burned: u8,
    pub disbursed: u8,
}
