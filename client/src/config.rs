use std::{fmt, path::PathBuf, sync::Arc};

use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    signer::keypair::read_keypair_file,
};
use tracing::debug;

use crate::{
    error::{RemoteInvocationError, Result},
    transport::{RpcTransport, Transport},
    workspace::{cluster_url, AnchorWorkspace},
};

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";
pub const COMMITMENT_VAR: &str = "ANCHOR_COMMITMENT";

/// Where to connect and who signs, before anything is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub url: String,
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderSettings {
    /// Read settings through `lookup`, which stands in for the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, PROVIDER_URL_VAR)?;
        let wallet = required(&lookup, WALLET_VAR)?;
        let commitment = match lookup(COMMITMENT_VAR) {
            Some(level) => parse_commitment(&level)?,
            None => CommitmentConfig::confirmed(),
        };
        Self::build(url, &wallet, commitment, &lookup)
    }

    /// Settings from the `[provider]` section of an `Anchor.toml`.
    pub fn from_workspace<F>(workspace: &AnchorWorkspace, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = workspace.provider()?;
        Self::build(
            cluster_url(&provider.cluster),
            &provider.wallet,
            CommitmentConfig::confirmed(),
            &lookup,
        )
    }

    fn build<F>(url: String, wallet: &str, commitment: CommitmentConfig, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RemoteInvocationError::Config(format!(
                "{PROVIDER_URL_VAR} must be an http(s) URL, got `{url}`"
            )));
        }
        Ok(Self {
            url,
            wallet: expand_home(wallet, lookup)?,
            commitment,
        })
    }

    /// Load the wallet and open an RPC transport to `url`.
    ///
    /// No request is sent here; an unreachable endpoint surfaces on first use.
    pub fn connect(&self) -> Result<ConnectionContext> {
        let payer = read_keypair_file(&self.wallet).map_err(|e| RemoteInvocationError::Wallet {
            path: self.wallet.clone(),
            message: e.to_string(),
        })?;
        let transport = RpcTransport::new(self.url.clone(), self.commitment);
        debug!(endpoint = %self.url, payer = %payer.pubkey(), "provider configured");
        Ok(ConnectionContext::new(Arc::new(transport), payer))
    }
}

/// Endpoint, signing identity and transport, shared by every handle resolved from it.
#[derive(Clone)]
pub struct ConnectionContext {
    transport: Arc<dyn Transport>,
    payer: Arc<Keypair>,
}

impl ConnectionContext {
    pub fn new(transport: Arc<dyn Transport>, payer: Keypair) -> Self {
        Self {
            transport,
            payer: Arc::new(payer),
        }
    }

    /// Build from `ANCHOR_PROVIDER_URL`, `ANCHOR_WALLET` and optional `ANCHOR_COMMITMENT`.
    pub fn from_env() -> Result<Self> {
        ProviderSettings::from_vars(|key| std::env::var(key).ok())?.connect()
    }

    pub fn from_workspace(workspace: &AnchorWorkspace) -> Result<Self> {
        ProviderSettings::from_workspace(workspace, |key| std::env::var(key).ok())?.connect()
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }
}

impl fmt::Debug for ConnectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionContext")
            .field("endpoint", &self.endpoint())
            .field("payer", &self.payer.pubkey())
            .finish()
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(RemoteInvocationError::Config(format!("{key} is not set"))),
    }
}

fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(RemoteInvocationError::Config(format!(
            "{COMMITMENT_VAR} must be processed, confirmed or finalized, got `{other}`"
        ))),
    }
}

fn expand_home<F>(path: &str, lookup: &F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = lookup("HOME")
                .ok_or_else(|| RemoteInvocationError::Config(format!("cannot expand `{path}`: HOME is not set")))?;
            Ok(PathBuf::from(home).join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
