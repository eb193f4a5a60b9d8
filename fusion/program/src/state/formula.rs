use anchor_lang::prelude::*;

use crate::{
    constants::{
        COLLECTIBLE_DEFINITION_ACCOUNTS, COLLECTIBLE_OUTPUT_ACCOUNTS, FUNGIBLE_DEFINITION_ACCOUNTS,
        FUNGIBLE_OUTPUT_ACCOUNTS, INGREDIENT_ACCOUNTS, MAX_INGREDIENTS, MAX_OUTPUT_ITEMS,
        PRINT_EDITION_ACCOUNTS,
    },
    FusionError,
};

/// A formula: the ingredients a crafter must hold and the items the
/// program hands out in exchange. Written once by `create_formula` and only
/// read afterwards.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Formula {
    /// Required inputs, in the order their accounts are passed to `craft`.
    pub ingredients: Vec<Ingredient>,
    /// Produced outputs, in the order their accounts are passed to `craft`.
    pub output_items: Vec<OutputItem>,
    /// Bump of the output authority PDA.
    pub bump: u8,
}

/// Size: 32 + 8 + 1 = 41 bytes
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ingredient {
    /// Pubkey of the ingredient's token mint
    pub mint: Pubkey,
    /// Amount of the token required to satisfy the formula
    pub amount: u64,
    /// Burns the ingredient when crafting, otherwise it only has to be held
    pub burn_on_craft: bool,
}

impl Ingredient {
    pub const LEN: usize = 32 + 8 + 1;
}

/// How a collectible output reaches the crafter.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditionMode {
    /// The master unit itself leaves custody; the output can be crafted once.
    Transfer,
    /// The master unit stays in custody and a numbered edition is printed.
    Print,
}

/// Size: 1 + max(32 + 8, 32 + 32 + 1) = 66 bytes
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputItem {
    /// Fungible token minted on demand by the output authority.
    Fungible { mint: Pubkey, amount: u64 },
    /// Unique collectible whose master unit is held in `custody`, a token
    /// account owned by the output authority.
    Collectible {
        mint: Pubkey,
        custody: Pubkey,
        mode: EditionMode,
    },
}

impl OutputItem {
    pub const LEN: usize = 1 + 32 + 32 + 1;

    pub fn mint(&self) -> &Pubkey {
        match self {
            OutputItem::Fungible { mint, .. } | OutputItem::Collectible { mint, .. } => mint,
        }
    }

    pub fn is_collectible_edition(&self) -> bool {
        matches!(self, OutputItem::Collectible { .. })
    }

    /// Remaining accounts this item takes in `create_formula`.
    pub fn definition_accounts(&self) -> usize {
        if self.is_collectible_edition() {
            COLLECTIBLE_DEFINITION_ACCOUNTS
        } else {
            FUNGIBLE_DEFINITION_ACCOUNTS
        }
    }

    /// Remaining accounts this item takes in `craft`.
    pub fn craft_accounts(&self) -> usize {
        match self {
            OutputItem::Fungible { .. } => FUNGIBLE_OUTPUT_ACCOUNTS,
            OutputItem::Collectible {
                mode: EditionMode::Transfer,
                ..
            } => COLLECTIBLE_OUTPUT_ACCOUNTS,
            OutputItem::Collectible {
                mode: EditionMode::Print,
                ..
            } => COLLECTIBLE_OUTPUT_ACCOUNTS + PRINT_EDITION_ACCOUNTS,
        }
    }
}

impl Formula {
    /// Account size for a formula with the declared counts, including the
    /// discriminator and both vec length prefixes.
    pub fn space(ingredient_count: u8, output_count: u8) -> usize {
        8 + 4
            + Ingredient::LEN * ingredient_count as usize
            + 4
            + OutputItem::LEN * output_count as usize
            + 1
    }

    /// Checks the declared counts against the schedule and that every amount
    /// is positive.
    pub fn validate_schedule(
        ingredient_count: u8,
        output_count: u8,
        ingredients: &[Ingredient],
        output_items: &[OutputItem],
    ) -> Result<()> {
        if ingredient_count == 0
            || output_count == 0
            || ingredients.len() != ingredient_count as usize
            || output_items.len() != output_count as usize
        {
            msg!(
                "declared {} ingredients / {} outputs, received {} / {}",
                ingredient_count,
                output_count,
                ingredients.len(),
                output_items.len()
            );
            return err!(FusionError::LengthMismatch);
        }

        require!(
            ingredients.len() <= MAX_INGREDIENTS && output_items.len() <= MAX_OUTPUT_ITEMS,
            FusionError::TooManyEntries
        );

        let zero_ingredient = ingredients.iter().any(|i| i.amount == 0);
        let zero_output = output_items
            .iter()
            .any(|item| matches!(item, OutputItem::Fungible { amount: 0, .. }));
        require!(!zero_ingredient && !zero_output, FusionError::ZeroAmount);

        Ok(())
    }

    /// Number of remaining accounts a `craft` of this formula expects.
    pub fn craft_account_count(&self) -> usize {
        self.ingredients.len() * INGREDIENT_ACCOUNTS
            + self
                .output_items
                .iter()
                .map(OutputItem::craft_accounts)
                .sum::<usize>()
    }
}
