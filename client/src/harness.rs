//! Smoke call against a deployed `real_estate` program.
//!
//! configure -> resolve -> invoke -> observe, no retries and no assertions
//! beyond the call succeeding.

use std::path::Path;

use solana_sdk::signature::Signature;
use tracing_subscriber::EnvFilter;

use crate::{
    config::ConnectionContext,
    error::{RemoteInvocationError, Result},
    registry::{ProgramRegistry, REAL_ESTATE},
    workspace::AnchorWorkspace,
};

/// Install a `fmt` subscriber honouring `RUST_LOG` (default `info`).
/// Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Configure from the environment, resolve `real_estate`, call `initialize`.
pub async fn initialize_from_env() -> Result<Signature> {
    let ctx = ConnectionContext::from_env()?;
    initialize_with(&ctx, &ProgramRegistry::builtin()).await
}

/// Same flow, configured from an `Anchor.toml` instead of the environment.
pub async fn initialize_from_workspace(path: impl AsRef<Path>) -> Result<Signature> {
    let workspace = AnchorWorkspace::load(path)?;
    let cluster = workspace.cluster_key().unwrap_or_else(|| "localnet".to_owned());
    let registry = ProgramRegistry::from_workspace(&workspace, &cluster)?;
    let ctx = ConnectionContext::from_workspace(&workspace)?;
    initialize_with(&ctx, &registry).await
}

/// Resolve and invoke on a context the caller already holds.
pub async fn initialize_with(ctx: &ConnectionContext, registry: &ProgramRegistry) -> Result<Signature> {
    let program = registry.resolve(REAL_ESTATE, ctx).await?;
    program.methods().initialize().rpc().await
}

/// Blocking form of [`initialize_from_env`] for callers without a runtime.
///
/// Fails with [`RemoteInvocationError::Config`] when called from inside a
/// tokio runtime; await [`initialize_from_env`] there instead.
pub fn initialize_blocking() -> Result<Signature> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(RemoteInvocationError::Config(
            "initialize_blocking called inside an async runtime".into(),
        ));
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RemoteInvocationError::Config(format!("cannot start runtime: {e}")))?;
    runtime.block_on(initialize_from_env())
}
