//! Client side of the `real_estate` program.
//!
//! The flow mirrors a framework test: build a [`ConnectionContext`] from the
//! environment, resolve a [`ProgramHandle`] by name through the
//! [`ProgramRegistry`], then call an entry point and await its signature.
//!
//! ```no_run
//! # async fn run() -> Result<(), real_estate_client::RemoteInvocationError> {
//! use real_estate_client::{ConnectionContext, ProgramRegistry};
//!
//! let ctx = ConnectionContext::from_env()?;
//! let program = ProgramRegistry::builtin().resolve("RealEstate", &ctx).await?;
//! let signature = program.methods().initialize().rpc().await?;
//! println!("Your transaction signature {signature}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod harness;
pub mod methods;
pub mod registry;
pub mod transport;
pub mod workspace;

pub use config::{ConnectionContext, ProviderSettings};
pub use error::{RemoteInvocationError, Result};
pub use handle::{ProgramHandle, PropertyAccount};
pub use methods::{MethodCall, Methods, PropertyListing};
pub use registry::ProgramRegistry;
pub use transport::{RpcTransport, Transport};
pub use workspace::AnchorWorkspace;
