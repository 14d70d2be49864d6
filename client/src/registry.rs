use std::{collections::BTreeMap, str::FromStr};

use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::{
    config::ConnectionContext,
    error::{RemoteInvocationError, Result},
    handle::ProgramHandle,
    workspace::AnchorWorkspace,
};

pub const REAL_ESTATE: &str = "real_estate";

/// Name -> address table used to turn a program name into a [`ProgramHandle`].
///
/// Lookups ignore case, `_` and `-`, so `RealEstate`, `real_estate` and
/// `real-estate` all find the same entry.
#[derive(Debug, Clone, Default)]
pub struct ProgramRegistry {
    entries: BTreeMap<String, (String, Pubkey)>,
}

impl ProgramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The programs this workspace builds, at their declared addresses.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(REAL_ESTATE, Pubkey::new_from_array(real_estate::ID));
        registry
    }

    /// [`ProgramRegistry::builtin`] overlaid with `[programs.<cluster>]` from `Anchor.toml`.
    pub fn from_workspace(workspace: &AnchorWorkspace, cluster: &str) -> Result<Self> {
        let mut registry = Self::builtin();
        if let Some(programs) = workspace.programs_for(cluster) {
            for (name, address) in programs {
                let address = Pubkey::from_str(address).map_err(|e| {
                    RemoteInvocationError::Config(format!("program `{name}` has invalid address `{address}`: {e}"))
                })?;
                registry.register(name, address);
            }
        }
        Ok(registry)
    }

    pub fn register(&mut self, name: &str, address: Pubkey) {
        self.entries.insert(normalize(name), (name.to_owned(), address));
    }

    pub fn address_of(&self, name: &str) -> Option<Pubkey> {
        self.entries.get(&normalize(name)).map(|(_, address)| *address)
    }

    /// Look `name` up and confirm an executable program lives at its address.
    ///
    /// Only reads chain state; nothing is submitted.
    pub async fn resolve(&self, name: &str, ctx: &ConnectionContext) -> Result<ProgramHandle> {
        let (canonical, address) = self
            .entries
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| RemoteInvocationError::UnknownProgram(name.to_owned()))?;

        let account = ctx.transport().get_account(&address).await?;
        match account {
            Some(account) if account.executable => {
                debug!(program = %canonical, %address, endpoint = ctx.endpoint(), "program resolved");
                Ok(ProgramHandle::new(canonical, address, ctx.clone()))
            }
            _ => Err(RemoteInvocationError::ProgramNotDeployed {
                name: canonical,
                address,
            }),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
