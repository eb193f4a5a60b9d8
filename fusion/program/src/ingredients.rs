use anchor_lang::prelude::*;

use crate::{
    utils::{cmp_pubkeys, token_account, RemainingAccounts},
    FusionError, Ingredient,
};

/// An ingredient whose accounts passed validation, ready to be consumed.
#[derive(Debug)]
pub struct ValidatedIngredient<'a, 'info> {
    pub ingredient: Ingredient,
    /// The crafter's token account holding the ingredient.
    pub token_account: &'a AccountInfo<'info>,
    /// The ingredient mint.
    pub mint: &'a AccountInfo<'info>,
}

impl<'a, 'info> ValidatedIngredient<'a, 'info> {
    pub fn burns(&self) -> bool {
        self.ingredient.burn_on_craft
    }
}

/// Pairs each ingredient, in order, with its `(token account, mint)` slot
/// from the remaining accounts and checks the crafter can satisfy it.
///
/// A token account used for several ingredients must cover their combined
/// amount.
pub fn validate_ingredients<'a, 'info>(
    ingredients: &[Ingredient],
    accounts: &mut RemainingAccounts<'a, 'info>,
    crafter: &Pubkey,
) -> Result<Vec<ValidatedIngredient<'a, 'info>>> {
    let mut validated = Vec::with_capacity(ingredients.len());
    let mut committed: Vec<(Pubkey, u64)> = Vec::new();

    for (index, ingredient) in ingredients.iter().enumerate() {
        let token_info = accounts.next_or(FusionError::MissingIngredientAccount)?;
        let mint_info = accounts.next_or(FusionError::MissingIngredientAccount)?;

        let token = token_account(token_info)?;

        if !cmp_pubkeys(&token.mint, &ingredient.mint) || !cmp_pubkeys(mint_info.key, &ingredient.mint)
        {
            msg!(
                "ingredient {}: expected mint {}, token account holds {}",
                index,
                ingredient.mint,
                token.mint
            );
            return err!(FusionError::IngredientMintMismatch);
        }

        if !cmp_pubkeys(&token.owner, crafter) {
            msg!("ingredient {}: token account owner is {}", index, token.owner);
            return err!(FusionError::IngredientOwnerMismatch);
        }

        let required = match committed
            .iter_mut()
            .find(|(key, _)| cmp_pubkeys(key, token_info.key))
        {
            Some((_, total)) => {
                *total = total
                    .checked_add(ingredient.amount)
                    .ok_or(FusionError::NumericalOverflow)?;
                *total
            }
            None => {
                committed.push((*token_info.key, ingredient.amount));
                ingredient.amount
            }
        };

        if token.amount < required {
            msg!(
                "ingredient {}: balance {} is below required {}",
                index,
                token.amount,
                required
            );
            return err!(FusionError::InsufficientIngredientBalance);
        }

        if ingredient.burn_on_craft && !(token_info.is_writable && mint_info.is_writable) {
            msg!("ingredient {}: burned accounts must be writable", index);
            return err!(FusionError::IngredientNotWritable);
        }

        validated.push(ValidatedIngredient {
            ingredient: *ingredient,
            token_account: token_info,
            mint: mint_info,
        });
    }

    Ok(validated)
}
