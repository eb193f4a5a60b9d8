#![allow(unused)]

use solana_program::{program_pack::Pack, pubkey::Pubkey, system_instruction};
use solana_program_test::*;
use solana_sdk::{
    instruction::InstructionError,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

/// Custom program error code of a failed first instruction, `0` otherwise.
pub fn custom_error(err: BanksClientError) -> u32 {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            0,
            InstructionError::Custom(err_num),
        )) => err_num,
        _ => 0,
    }
}

pub async fn airdrop(context: &mut ProgramTestContext, receiver: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            receiver,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn create_mint(
    context: &mut ProgramTestContext,
    mint: &Keypair,
    authority: &Pubkey,
    decimals: u8,
) {
    let rent = context.banks_client.get_rent().await.unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &context.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                authority,
                None,
                decimals,
            )
            .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn create_token_account(
    context: &mut ProgramTestContext,
    account: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) {
    let rent = context.banks_client.get_rent().await.unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &context.payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account(
                &spl_token::id(),
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer, account],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn mint_to(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    to: &Pubkey,
    authority: &Keypair,
    amount: u64,
) {
    let tx = Transaction::new_signed_with_payer(
        &[spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            to,
            &authority.pubkey(),
            &[],
            amount,
        )
        .unwrap()],
        Some(&context.payer.pubkey()),
        &[&context.payer, authority],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn get_token_account(
    context: &mut ProgramTestContext,
    address: &Pubkey,
) -> spl_token::state::Account {
    let account = context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("token account not found");
    spl_token::state::Account::unpack(&account.data).unwrap()
}

pub async fn get_mint(context: &mut ProgramTestContext, address: &Pubkey) -> spl_token::state::Mint {
    let account = context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("mint not found");
    spl_token::state::Mint::unpack(&account.data).unwrap()
}

pub async fn create_token_metadata(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    mint_authority: &Keypair,
    update_authority: &Keypair,
    name: String,
    symbol: String,
    uri: String,
) -> Pubkey {
    let (metadata, _) = Pubkey::find_program_address(
        &[
            mpl_token_metadata::state::PREFIX.as_bytes(),
            mpl_token_metadata::id().as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::id(),
    );

    let tx = Transaction::new_signed_with_payer(
        &[mpl_token_metadata::instruction::create_metadata_accounts_v2(
            mpl_token_metadata::id(),
            metadata,
            *mint,
            mint_authority.pubkey(),
            context.payer.pubkey(),
            update_authority.pubkey(),
            name,
            symbol,
            uri,
            None,
            0,
            true,
            true,
            None,
            None,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint_authority, update_authority],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();

    metadata
}

pub fn find_edition_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            mpl_token_metadata::state::PREFIX.as_bytes(),
            mpl_token_metadata::id().as_ref(),
            mint.as_ref(),
            mpl_token_metadata::state::EDITION.as_bytes(),
        ],
        &mpl_token_metadata::id(),
    )
    .0
}

pub fn find_metadata_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            mpl_token_metadata::state::PREFIX.as_bytes(),
            mpl_token_metadata::id().as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::id(),
    )
    .0
}

pub fn find_edition_marker_address(master_mint: &Pubkey, edition: u64) -> Pubkey {
    let marker = (edition / mpl_token_metadata::state::EDITION_MARKER_BIT_SIZE).to_string();
    Pubkey::find_program_address(
        &[
            mpl_token_metadata::state::PREFIX.as_bytes(),
            mpl_token_metadata::id().as_ref(),
            master_mint.as_ref(),
            mpl_token_metadata::state::EDITION.as_bytes(),
            marker.as_bytes(),
        ],
        &mpl_token_metadata::id(),
    )
    .0
}

pub async fn create_master_edition(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    update_authority: &Keypair,
    mint_authority: &Keypair,
    metadata: &Pubkey,
    max_supply: Option<u64>,
) -> Pubkey {
    let edition = find_edition_address(mint);

    let tx = Transaction::new_signed_with_payer(
        &[mpl_token_metadata::instruction::create_master_edition_v3(
            mpl_token_metadata::id(),
            edition,
            *mint,
            update_authority.pubkey(),
            mint_authority.pubkey(),
            *metadata,
            context.payer.pubkey(),
            max_supply,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint_authority, update_authority],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await.unwrap();

    edition
}
