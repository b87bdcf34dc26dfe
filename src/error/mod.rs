//! Error types for the token-creation client.
//!
//! All failures cross the client boundary as a [`ClientError`]; nothing in the
//! crate panics on the way out. The variants mirror how the orchestrator
//! treats each failure:
//!
//! - `Validation`: caller input rejected before any network call.
//! - `DerivationFailure`: no PDA exists in the bump-seed search space. This
//!   indicates corrupted protocol constants and is never retried.
//! - `BlockhashExpired`: the submitted blockhash fell out of the validity
//!   window; the orchestrator rebuilds the bundle and retries.
//! - `TransientNetwork`: the RPC endpoint was unreachable; retried up to the
//!   attempt cap.
//! - `ProtocolRejection`: the program rejected the transaction. Resubmitting
//!   an identical transaction would fail identically, so this is terminal.
//! - `MaxAttemptsReached`: the retry budget ran out.

use crate::transport::TransportError;

#[derive(Debug)]
pub enum ClientError {
    /// Caller-supplied arguments failed validation
    Validation(String),
    /// No program derived address found for the given seeds
    DerivationFailure,
    /// The transaction's blockhash expired before the transaction landed
    BlockhashExpired,
    /// The RPC endpoint could not be reached
    TransientNetwork(String),
    /// The program or RPC node rejected the transaction
    ProtocolRejection(String),
    /// Every retry attempt was consumed without the transaction landing
    MaxAttemptsReached,
    /// Error serializing the signed transaction to wire format
    Serialization(bincode::Error),
    /// Error uploading metadata to the pinning service
    UploadMetadata(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
            Self::DerivationFailure => write!(f, "No program derived address for seeds"),
            Self::BlockhashExpired => write!(f, "Blockhash expired"),
            Self::TransientNetwork(msg) => write!(f, "Network unavailable: {}", msg),
            Self::ProtocolRejection(msg) => write!(f, "Transaction rejected: {}", msg),
            Self::MaxAttemptsReached => write!(f, "Maximum number of attempts reached"),
            Self::Serialization(err) => write!(f, "Transaction serialization error: {}", err),
            Self::UploadMetadata(err) => write!(f, "Metadata upload error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::UploadMetadata(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::BlockhashExpired => Self::BlockhashExpired,
            TransportError::Unavailable(msg) => Self::TransientNetwork(msg),
            TransportError::Rejected(msg) => Self::ProtocolRejection(msg),
        }
    }
}

impl From<bincode::Error> for ClientError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err)
    }
}
