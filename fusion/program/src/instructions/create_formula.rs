use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::{
    authority::OutputAuthority,
    token_utils::{spl_token_set_mint_authority, spl_token_transfer, TokenTransferParams},
    utils::{cmp_pubkeys, mint_account, mint_authority_is, token_account, RemainingAccounts},
    Formula, FormulaCreated, FusionError, Ingredient, OutputItem,
};

#[derive(Accounts)]
#[instruction(ingredient_count: u8, output_count: u8)]
pub struct CreateFormula<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        payer = authority,
        space = Formula::space(ingredient_count, output_count)
    )]
    pub formula: Account<'info, Formula>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateFormula<'info> {
    /// Remaining accounts: `[mint]` per fungible output and
    /// `[mint, holder, custody]` per collectible output, in output order.
    fn hand_over_outputs(
        &self,
        output_items: &[OutputItem],
        accounts: &mut RemainingAccounts<'_, 'info>,
        authority: &OutputAuthority,
    ) -> Result<()> {
        for (index, item) in output_items.iter().enumerate() {
            match *item {
                OutputItem::Fungible { mint, .. } => {
                    let mint_info = accounts.next_or(FusionError::MissingOutputAccount)?;
                    self.hand_over_mint_authority(index, &mint, mint_info, authority)?;
                }
                OutputItem::Collectible { mint, custody, .. } => {
                    let mint_info =
                        accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?;
                    let holder_info =
                        accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?;
                    let custody_info =
                        accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?;

                    if !cmp_pubkeys(mint_info.key, &mint) {
                        msg!("output {}: expected mint {}, got {}", index, mint, mint_info.key);
                        return err!(FusionError::OutputAccountMintMismatch);
                    }
                    if !cmp_pubkeys(custody_info.key, &custody) {
                        msg!("output {}: expected custody {}", index, custody);
                        return err!(FusionError::MissingCollectibleCustodyAccount);
                    }
                    self.deposit_collectible(index, &mint, holder_info, custody_info, authority)?;
                }
            }
        }
        Ok(())
    }

    fn hand_over_mint_authority(
        &self,
        index: usize,
        mint: &Pubkey,
        mint_info: &AccountInfo<'info>,
        authority: &OutputAuthority,
    ) -> Result<()> {
        if !cmp_pubkeys(mint_info.key, mint) {
            msg!("output {}: expected mint {}, got {}", index, mint, mint_info.key);
            return err!(FusionError::OutputAccountMintMismatch);
        }

        let output_mint = mint_account(mint_info)?;
        if !mint_authority_is(&output_mint, self.authority.key) {
            msg!("output {}: signer is not the mint authority of {}", index, mint);
            return err!(FusionError::UnauthorizedMintAuthority);
        }

        spl_token_set_mint_authority(
            mint_info.clone(),
            self.authority.to_account_info(),
            authority,
            self.token_program.to_account_info(),
        )
    }

    fn deposit_collectible(
        &self,
        index: usize,
        mint: &Pubkey,
        holder_info: &AccountInfo<'info>,
        custody_info: &AccountInfo<'info>,
        authority: &OutputAuthority,
    ) -> Result<()> {
        let holder = token_account(holder_info)?;
        if !cmp_pubkeys(&holder.mint, mint) {
            msg!("output {}: holder contains mint {}", index, holder.mint);
            return err!(FusionError::OutputAccountMintMismatch);
        }
        if !cmp_pubkeys(&holder.owner, self.authority.key) {
            msg!("output {}: collectible is held by {}", index, holder.owner);
            return err!(FusionError::UnauthorizedMintAuthority);
        }
        if holder.amount == 0 {
            return err!(FusionError::CollectibleSupplyExhausted);
        }

        let custody = token_account(custody_info)
            .map_err(|_| error!(FusionError::MissingCollectibleCustodyAccount))?;
        if !cmp_pubkeys(&custody.mint, mint) || !cmp_pubkeys(&custody.owner, authority.address())
        {
            msg!(
                "output {}: custody {} must hold {} for {}",
                index,
                custody_info.key,
                mint,
                authority.address()
            );
            return err!(FusionError::MissingCollectibleCustodyAccount);
        }

        spl_token_transfer(TokenTransferParams {
            source: holder_info.clone(),
            destination: custody_info.clone(),
            amount: 1,
            authority: self.authority.to_account_info(),
            token_program: self.token_program.to_account_info(),
        })
    }
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, CreateFormula<'info>>,
    ingredient_count: u8,
    output_count: u8,
    ingredients: Vec<Ingredient>,
    output_items: Vec<OutputItem>,
    bump: u8,
) -> Result<()> {
    Formula::validate_schedule(ingredient_count, output_count, &ingredients, &output_items)?;

    let formula_key = ctx.accounts.formula.key();
    let authority = OutputAuthority::establish(&formula_key, bump, ctx.program_id)?;

    let expected: usize = output_items
        .iter()
        .map(OutputItem::definition_accounts)
        .sum();
    if ctx.remaining_accounts.len() > expected {
        msg!(
            "expected {} remaining accounts, got {}",
            expected,
            ctx.remaining_accounts.len()
        );
        return err!(FusionError::InvalidRemainingAccountsLength);
    }

    let mut accounts = RemainingAccounts::new(ctx.remaining_accounts);
    ctx.accounts
        .hand_over_outputs(&output_items, &mut accounts, &authority)?;
    accounts.finish()?;

    let formula = &mut ctx.accounts.formula;
    formula.ingredients = ingredients;
    formula.output_items = output_items;
    formula.bump = authority.bump();

    msg!(
        "formula {} created, output authority {}",
        formula_key,
        authority.address()
    );
    emit!(FormulaCreated {
        formula: formula_key,
        creator: ctx.accounts.authority.key(),
        output_authority: *authority.address(),
        ingredients: ingredient_count,
        output_items: output_count,
    });

    Ok(())
}
