use anchor_lang::prelude::*;

use crate::{
    authority::OutputAuthority,
    utils::{
        assert_owned_by, cmp_pubkeys, mint_account, mint_authority_is, token_account,
        RemainingAccounts,
    },
    EditionMode, FusionError, OutputItem,
};

/// `(destination token account, mint)` for a fungible output.
#[derive(Debug)]
pub struct FungibleAccounts<'a, 'info> {
    pub destination: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
}

impl<'a, 'info> FungibleAccounts<'a, 'info> {
    fn take(accounts: &mut RemainingAccounts<'a, 'info>) -> Result<Self> {
        Ok(Self {
            destination: accounts.next_or(FusionError::MissingOutputAccount)?,
            mint: accounts.next_or(FusionError::MissingOutputAccount)?,
        })
    }
}

/// `(mint, custody, recipient, mint)` for a collectible output. The trailing
/// mint repeats the first slot.
#[derive(Debug)]
pub struct CollectibleAccounts<'a, 'info> {
    pub mint: &'a AccountInfo<'info>,
    pub custody: &'a AccountInfo<'info>,
    pub recipient: &'a AccountInfo<'info>,
    pub mint_check: &'a AccountInfo<'info>,
}

impl<'a, 'info> CollectibleAccounts<'a, 'info> {
    fn take(accounts: &mut RemainingAccounts<'a, 'info>) -> Result<Self> {
        Ok(Self {
            mint: accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?,
            custody: accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?,
            recipient: accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?,
            mint_check: accounts.next_or(FusionError::MissingCollectibleCustodyAccount)?,
        })
    }
}

/// Token Metadata accounts needed to print a new edition from the master
/// held in custody.
#[derive(Debug)]
pub struct PrintEditionAccounts<'a, 'info> {
    pub token_metadata_program: &'a AccountInfo<'info>,
    pub new_mint: &'a AccountInfo<'info>,
    pub new_metadata: &'a AccountInfo<'info>,
    pub new_edition: &'a AccountInfo<'info>,
    pub master_edition: &'a AccountInfo<'info>,
    pub edition_marker: &'a AccountInfo<'info>,
    pub master_metadata: &'a AccountInfo<'info>,
}

impl<'a, 'info> PrintEditionAccounts<'a, 'info> {
    fn take(accounts: &mut RemainingAccounts<'a, 'info>) -> Result<Self> {
        let mut next = || accounts.next_or(FusionError::MissingCollectibleCustodyAccount);
        Ok(Self {
            token_metadata_program: next()?,
            new_mint: next()?,
            new_metadata: next()?,
            new_edition: next()?,
            master_edition: next()?,
            edition_marker: next()?,
            master_metadata: next()?,
        })
    }
}

/// A validated output, ready to be handed out by the output authority.
#[derive(Debug)]
pub enum Disbursement<'a, 'info> {
    Mint {
        amount: u64,
        accounts: FungibleAccounts<'a, 'info>,
    },
    TransferCustody {
        accounts: CollectibleAccounts<'a, 'info>,
    },
    PrintEdition {
        accounts: CollectibleAccounts<'a, 'info>,
        edition: PrintEditionAccounts<'a, 'info>,
    },
}

/// Pairs each output item, in order, with its slot in the remaining accounts
/// and checks the output authority can disburse it.
pub fn validate_outputs<'a, 'info>(
    output_items: &[OutputItem],
    accounts: &mut RemainingAccounts<'a, 'info>,
    authority: &OutputAuthority,
) -> Result<Vec<Disbursement<'a, 'info>>> {
    let mut disbursements = Vec::with_capacity(output_items.len());

    for (index, item) in output_items.iter().enumerate() {
        let disbursement = match *item {
            OutputItem::Fungible { mint, amount } => {
                let slot = FungibleAccounts::take(accounts)?;
                validate_fungible(index, &mint, &slot, authority)?;
                Disbursement::Mint {
                    amount,
                    accounts: slot,
                }
            }
            OutputItem::Collectible {
                mint,
                custody,
                mode,
            } => {
                let slot = CollectibleAccounts::take(accounts)?;
                validate_custody(index, &mint, &custody, &slot, authority)?;
                match mode {
                    EditionMode::Transfer => {
                        validate_recipient(index, &mint, slot.recipient)?;
                        Disbursement::TransferCustody { accounts: slot }
                    }
                    EditionMode::Print => {
                        let edition = PrintEditionAccounts::take(accounts)?;
                        validate_print(index, &slot, &edition)?;
                        Disbursement::PrintEdition {
                            accounts: slot,
                            edition,
                        }
                    }
                }
            }
        };
        disbursements.push(disbursement);
    }

    Ok(disbursements)
}

fn validate_fungible(
    index: usize,
    mint: &Pubkey,
    slot: &FungibleAccounts,
    authority: &OutputAuthority,
) -> Result<()> {
    let destination = token_account(slot.destination)?;
    if !cmp_pubkeys(&destination.mint, mint) || !cmp_pubkeys(slot.mint.key, mint) {
        msg!(
            "output {}: expected mint {}, destination holds {}",
            index,
            mint,
            destination.mint
        );
        return err!(FusionError::OutputAccountMintMismatch);
    }
    if !slot.destination.is_writable || !slot.mint.is_writable {
        return err!(FusionError::OutputAccountNotWritable);
    }

    let output_mint = mint_account(slot.mint)?;
    if !mint_authority_is(&output_mint, authority.address()) {
        msg!("output {}: mint {} is not controlled by the formula", index, mint);
        return err!(FusionError::UnauthorizedMintAuthority);
    }
    Ok(())
}

fn validate_custody(
    index: usize,
    mint: &Pubkey,
    custody: &Pubkey,
    slot: &CollectibleAccounts,
    authority: &OutputAuthority,
) -> Result<()> {
    if !cmp_pubkeys(slot.mint.key, mint) {
        msg!("output {}: expected mint {}, got {}", index, mint, slot.mint.key);
        return err!(FusionError::OutputAccountMintMismatch);
    }
    if !cmp_pubkeys(slot.mint_check.key, mint) || !cmp_pubkeys(slot.custody.key, custody) {
        msg!("output {}: collectible slot does not match the formula", index);
        return err!(FusionError::MissingCollectibleCustodyAccount);
    }

    let held = token_account(slot.custody)
        .map_err(|_| error!(FusionError::MissingCollectibleCustodyAccount))?;
    if !cmp_pubkeys(&held.mint, mint) || !cmp_pubkeys(&held.owner, authority.address()) {
        msg!("output {}: custody {} is not held by the formula", index, custody);
        return err!(FusionError::MissingCollectibleCustodyAccount);
    }
    if held.amount == 0 {
        msg!("output {}: custody {} is empty", index, custody);
        return err!(FusionError::CollectibleSupplyExhausted);
    }
    Ok(())
}

fn validate_recipient(index: usize, mint: &Pubkey, recipient: &AccountInfo) -> Result<()> {
    let held = token_account(recipient)?;
    if !cmp_pubkeys(&held.mint, mint) {
        msg!("output {}: recipient holds mint {}", index, held.mint);
        return err!(FusionError::OutputAccountMintMismatch);
    }
    if !recipient.is_writable {
        return err!(FusionError::OutputAccountNotWritable);
    }
    Ok(())
}

fn validate_print(
    index: usize,
    slot: &CollectibleAccounts,
    edition: &PrintEditionAccounts,
) -> Result<()> {
    if !mpl_token_metadata::check_id(edition.token_metadata_program.key) {
        return err!(FusionError::InvalidTokenMetadataProgram);
    }
    assert_owned_by(edition.master_edition, &mpl_token_metadata::id())?;
    assert_owned_by(edition.master_metadata, &mpl_token_metadata::id())?;

    let held = token_account(slot.recipient)?;
    if !cmp_pubkeys(&held.mint, edition.new_mint.key) {
        msg!(
            "output {}: recipient holds {}, new edition mint is {}",
            index,
            held.mint,
            edition.new_mint.key
        );
        return err!(FusionError::OutputAccountMintMismatch);
    }
    Ok(())
}
