#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
    system_instruction,
};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(real_estate::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("real_estate.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_program("real_estate", program_id(), None);
    pt
}

// Shared adapter for instruction building + state helpers
pub mod pin_adapter;

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// Sign with the context payer plus `signers` and submit.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[solana_sdk::instruction::Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let mut all: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
    all.push(&ctx.payer);
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&ctx.payer.pubkey()), &all, ctx.last_blockhash);
    ctx.banks_client.process_transaction(tx).await
}

/// Custom program error code carried by a failed transaction, if any.
pub fn custom_code(err: &BanksClientError) -> Option<u32> {
    let tx_err = match err {
        BanksClientError::TransactionError(e) => e,
        BanksClientError::SimulationError { err, .. } => err,
        _ => return None,
    };
    match tx_err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

pub fn instruction_error(err: &BanksClientError) -> Option<InstructionError> {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(_, e))
        | BanksClientError::SimulationError { err: TransactionError::InstructionError(_, e), .. } => {
            Some(e.clone())
        }
        _ => None,
    }
}
