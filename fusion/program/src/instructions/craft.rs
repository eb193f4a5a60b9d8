use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::{
    authority::OutputAuthority,
    engine::{CraftPhase, CraftSession},
    ingredients::{validate_ingredients, ValidatedIngredient},
    outputs::{validate_outputs, Disbursement},
    token_metadata_utils::{mint_new_edition_cpi, PrintEditionParams},
    token_utils::{
        spl_token_burn, spl_token_mint_to_as_authority, spl_token_transfer_as_authority,
        AuthorityTokenParams, TokenBurnParams,
    },
    utils::RemainingAccounts,
    Formula, FormulaCrafted, FusionError,
};

#[derive(Accounts)]
pub struct Craft<'info> {
    pub formula: Account<'info, Formula>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: derivation is checked against the formula's stored bump
    pub output_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Craft<'info> {
    fn consume(&self, ingredients: &[ValidatedIngredient<'_, 'info>]) -> Result<u8> {
        let mut burned = 0u8;
        for validated in ingredients.iter().filter(|v| v.burns()) {
            spl_token_burn(TokenBurnParams {
                mint: validated.mint.clone(),
                source: validated.token_account.clone(),
                amount: validated.ingredient.amount,
                authority: self.authority.to_account_info(),
                token_program: self.token_program.to_account_info(),
            })?;
            msg!(
                "burned {} of {}",
                validated.ingredient.amount,
                validated.ingredient.mint
            );
            burned += 1;
        }
        Ok(burned)
    }

    fn dispense(
        &self,
        disbursements: Vec<Disbursement<'_, 'info>>,
        authority: &OutputAuthority,
    ) -> Result<u8> {
        let mut disbursed = 0u8;
        for disbursement in disbursements {
            match disbursement {
                Disbursement::Mint { amount, accounts } => {
                    spl_token_mint_to_as_authority(
                        AuthorityTokenParams {
                            source: accounts.mint.clone(),
                            destination: accounts.destination.clone(),
                            amount,
                            authority_info: self.output_authority.to_account_info(),
                            token_program: self.token_program.to_account_info(),
                        },
                        authority,
                    )?;
                    msg!("minted {} of {}", amount, accounts.mint.key);
                }
                Disbursement::TransferCustody { accounts } => {
                    spl_token_transfer_as_authority(
                        AuthorityTokenParams {
                            source: accounts.custody.clone(),
                            destination: accounts.recipient.clone(),
                            amount: 1,
                            authority_info: self.output_authority.to_account_info(),
                            token_program: self.token_program.to_account_info(),
                        },
                        authority,
                    )?;
                    msg!("released {} from custody", accounts.mint.key);
                }
                Disbursement::PrintEdition { accounts, edition } => {
                    let number = mint_new_edition_cpi(
                        &accounts,
                        &edition,
                        PrintEditionParams {
                            payer: self.authority.to_account_info(),
                            authority_info: self.output_authority.to_account_info(),
                            token_program: self.token_program.to_account_info(),
                            system_program: self.system_program.to_account_info(),
                            rent: self.rent.to_account_info(),
                        },
                        authority,
                    )?;
                    msg!("printed edition {} of {}", number, accounts.mint.key);
                }
            }
            disbursed += 1;
        }
        Ok(disbursed)
    }
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, Craft<'info>>, bump: u8) -> Result<()> {
    let accounts = &ctx.accounts;
    let formula = &accounts.formula;
    let formula_key = formula.key();
    let crafter = accounts.authority.key();

    let mut session = CraftSession::new();
    session.advance(CraftPhase::Validating)?;

    let authority = session.run(|| {
        OutputAuthority::verify(
            &formula_key,
            formula.bump,
            bump,
            accounts.output_authority.key,
            ctx.program_id,
        )
    })?;

    let expected = formula.craft_account_count();
    if ctx.remaining_accounts.len() > expected {
        msg!(
            "expected {} remaining accounts, got {}",
            expected,
            ctx.remaining_accounts.len()
        );
        return session.run(|| err!(FusionError::InvalidRemainingAccountsLength));
    }

    let mut remaining = RemainingAccounts::new(ctx.remaining_accounts);
    let ingredients =
        session.run(|| validate_ingredients(&formula.ingredients, &mut remaining, &crafter))?;
    let disbursements =
        session.run(|| validate_outputs(&formula.output_items, &mut remaining, &authority))?;
    session.run(|| remaining.finish())?;

    session.advance(CraftPhase::Consuming)?;
    let burned = session.run(|| accounts.consume(&ingredients))?;

    session.advance(CraftPhase::Dispensing)?;
    let disbursed = session.run(|| accounts.dispense(disbursements, &authority))?;

    session.advance(CraftPhase::Committed)?;
    emit!(FormulaCrafted {
        formula: formula_key,
        crafter,
        burned,
        disbursed,
    });

    Ok(())
}
