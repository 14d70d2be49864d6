use std::path::PathBuf;

use real_estate::error::RealEstateError;
use solana_sdk::{instruction::InstructionError, pubkey::Pubkey, transaction::TransactionError};
use thiserror::Error;

pub type Result<T, E = RemoteInvocationError> = std::result::Result<T, E>;

/// Everything that can stop a remote call, from configuration to rejection.
#[derive(Debug, Error)]
pub enum RemoteInvocationError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid workspace file: {0}")]
    Workspace(#[from] toml::de::Error),

    #[error("failed to read wallet keypair {}: {message}", path.display())]
    Wallet { path: PathBuf, message: String },

    #[error("unknown program `{0}`")]
    UnknownProgram(String),

    #[error("program `{name}` is not deployed at {address}")]
    ProgramNotDeployed { name: String, address: Pubkey },

    #[error("endpoint {endpoint} is unreachable: {message}")]
    Unreachable { endpoint: String, message: String },

    #[error("transaction rejected: {0}")]
    Rejected(#[source] TransactionError),

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("account {address} could not be decoded: {message}")]
    Account { address: Pubkey, message: String },
}

impl RemoteInvocationError {
    /// Custom program error code, when the cluster rejected an instruction with one.
    pub fn custom_code(&self) -> Option<u32> {
        match self {
            Self::Rejected(TransactionError::InstructionError(_, InstructionError::Custom(code))) => {
                Some(*code)
            }
            _ => None,
        }
    }

    /// The program's own error, if the rejection carried one.
    pub fn program_error(&self) -> Option<RealEstateError> {
        self.custom_code().and_then(RealEstateError::from_code)
    }
}
