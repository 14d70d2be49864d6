use async_trait::async_trait;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
    signature::Signature, transaction::Transaction,
};

use crate::error::{RemoteInvocationError, Result};

/// The network seam: everything the client needs from a cluster.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable location, used in error messages and logs.
    fn endpoint(&self) -> &str;

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>>;

    async fn latest_blockhash(&self) -> Result<Hash>;

    /// Submit and wait until the cluster confirms or rejects.
    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature>;
}

/// JSON-RPC transport backed by the nonblocking `RpcClient`.
pub struct RpcTransport {
    client: RpcClient,
    url: String,
}

impl RpcTransport {
    pub fn new(url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        let url = url.into();
        Self {
            client: RpcClient::new_with_commitment(url.clone(), commitment),
            url,
        }
    }

    fn classify(&self, err: ClientError) -> RemoteInvocationError {
        if let Some(tx_err) = err.get_transaction_error() {
            return RemoteInvocationError::Rejected(tx_err);
        }
        match err.kind() {
            ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => RemoteInvocationError::Unreachable {
                endpoint: self.url.clone(),
                message: err.to_string(),
            },
            _ => RemoteInvocationError::Rpc(err.to_string()),
        }
    }
}

#[async_trait]
impl Transport for RpcTransport {
    fn endpoint(&self) -> &str {
        &self.url
    }

    /// `get_account_with_commitment` folds transport failures into an
    /// `AccountNotFound` RPC error, so the multi-account form is used to keep
    /// the original error kind.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        self.client
            .get_multiple_accounts_with_commitment(&[*address], self.client.commitment())
            .await
            .map(|response| response.value.into_iter().next().flatten())
            .map_err(|e| self.classify(e))
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(|e| self.classify(e))
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        self.client
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| self.classify(e))
    }
}
