use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::error::{RemoteInvocationError, Result};

pub const LOCALNET_URL: &str = "http://127.0.0.1:8899";
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";

/// The parts of an `Anchor.toml` this client reads.
///
/// ```toml
/// [provider]
/// cluster = "Localnet"
/// wallet = "~/.config/solana/id.json"
///
/// [programs.localnet]
/// real_estate = "GCPRCAMZWnTCtawVi6wMuXNy9Rdja6dvoastFFPkrBd3"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnchorWorkspace {
    pub provider: Option<ProviderSection>,
    /// cluster -> program name -> base58 address
    #[serde(default)]
    pub programs: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSection {
    pub cluster: String,
    pub wallet: String,
}

impl AnchorWorkspace {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            RemoteInvocationError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn provider(&self) -> Result<&ProviderSection> {
        self.provider
            .as_ref()
            .ok_or_else(|| RemoteInvocationError::Config("workspace has no [provider] section".into()))
    }

    /// Key into `programs` for the configured cluster. Custom URLs use `localnet`.
    pub fn cluster_key(&self) -> Option<String> {
        let cluster = self.provider.as_ref()?.cluster.to_ascii_lowercase();
        Some(match cluster.as_str() {
            "localnet" | "devnet" | "testnet" | "mainnet" => cluster,
            "mainnet-beta" => "mainnet".to_owned(),
            _ => "localnet".to_owned(),
        })
    }

    /// Programs declared for `cluster`, keyed by name.
    pub fn programs_for(&self, cluster: &str) -> Option<&BTreeMap<String, String>> {
        self.programs.get(&cluster.to_ascii_lowercase())
    }
}

/// Map a cluster moniker to its RPC endpoint; anything else is taken as a URL.
pub fn cluster_url(cluster: &str) -> String {
    match cluster.to_ascii_lowercase().as_str() {
        "localnet" | "localhost" => LOCALNET_URL.to_owned(),
        "devnet" => DEVNET_URL.to_owned(),
        "testnet" => TESTNET_URL.to_owned(),
        "mainnet" | "mainnet-beta" => MAINNET_URL.to_owned(),
        _ => cluster.to_owned(),
    }
}
