#![allow(dead_code)]

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use real_estate_client::{RemoteInvocationError, Transport};
use solana_program_test::{BanksClient, BanksClientError, ProgramTestBanksClientExt, ProgramTestContext};
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature, system_program,
    transaction::{Transaction, TransactionError},
};
use tracing::subscriber::DefaultGuard;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(real_estate::ID)
}

pub fn executable_account() -> Account {
    Account {
        lamports: 1_141_440,
        data: vec![],
        owner: Pubkey::new_unique(),
        executable: true,
        rent_epoch: 0,
    }
}

pub fn plain_account(lamports: u64) -> Account {
    Account {
        lamports,
        data: vec![],
        owner: system_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// In-memory cluster: serves accounts from a map and accepts (or rejects) every transaction.
pub struct MockTransport {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    reject: Option<TransactionError>,
    sent: Mutex<Vec<Transaction>>,
}

impl MockTransport {
    pub fn empty() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            reject: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A cluster where `real_estate` is deployed.
    pub fn with_program() -> Self {
        Self::empty().with_account(program_id(), executable_account())
    }

    pub fn with_account(self, address: Pubkey, account: Account) -> Self {
        self.accounts.lock().unwrap().insert(address, account);
        self
    }

    pub fn rejecting(mut self, err: TransactionError) -> Self {
        self.reject = Some(err);
        self
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn endpoint(&self) -> &str {
        "mock"
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RemoteInvocationError> {
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn latest_blockhash(&self) -> Result<Hash, RemoteInvocationError> {
        Ok(Hash::new_unique())
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, RemoteInvocationError> {
        transaction
            .verify()
            .map_err(RemoteInvocationError::Rejected)?;
        if let Some(err) = &self.reject {
            return Err(RemoteInvocationError::Rejected(err.clone()));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

/// Transport over an in-process bank from `solana-program-test`.
pub struct BanksTransport {
    client: tokio::sync::Mutex<BanksClient>,
    last_blockhash: tokio::sync::Mutex<Hash>,
}

impl BanksTransport {
    pub fn new(ctx: &ProgramTestContext) -> Self {
        Self {
            client: tokio::sync::Mutex::new(ctx.banks_client.clone()),
            last_blockhash: tokio::sync::Mutex::new(ctx.last_blockhash),
        }
    }
}

fn banks_error(err: BanksClientError) -> RemoteInvocationError {
    match err {
        BanksClientError::TransactionError(e) | BanksClientError::SimulationError { err: e, .. } => {
            RemoteInvocationError::Rejected(e)
        }
        other => RemoteInvocationError::Unreachable {
            endpoint: "banks".into(),
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl Transport for BanksTransport {
    fn endpoint(&self) -> &str {
        "banks"
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RemoteInvocationError> {
        let mut client = self.client.lock().await;
        client.get_account(*address).await.map_err(banks_error)
    }

    /// Waits for a hash newer than the last one handed out, so repeated
    /// identical calls still produce distinct transactions.
    async fn latest_blockhash(&self) -> Result<Hash, RemoteInvocationError> {
        let mut last = self.last_blockhash.lock().await;
        let mut client = self.client.lock().await;
        let fresh = client
            .get_new_latest_blockhash(&last)
            .await
            .map_err(|e| RemoteInvocationError::Unreachable {
                endpoint: "banks".into(),
                message: e.to_string(),
            })?;
        *last = fresh;
        Ok(fresh)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, RemoteInvocationError> {
        let mut client = self.client.lock().await;
        client
            .process_transaction(transaction.clone())
            .await
            .map_err(banks_error)?;
        Ok(transaction.signatures[0])
    }
}

/// Collects formatted `tracing` output for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Route events to this buffer until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}
