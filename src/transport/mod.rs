//! Narrow boundary between the client and the Solana RPC layer.
//!
//! The orchestrator only ever needs three things from the network: a fresh
//! blockhash, raw-transaction submission, and a single account-data read for
//! the fee-recipient lookup. [`Transport`] captures exactly that surface so
//! the retry loop can be exercised against an in-process stub, and
//! [`RpcTransport`] carries it over `solana-client`'s nonblocking RPC client.

use async_trait::async_trait;
use base64::{prelude::BASE64_STANDARD, Engine};
use serde_json::json;
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_request::RpcRequest,
};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::TransactionError,
};
use std::sync::Arc;

/// Failure classification for transport operations.
///
/// The distinction matters to the retry loop: an expired blockhash requires
/// rebuilding the bundle with a fresh hash, an unreachable endpoint can be
/// retried as-is, and a rejection is terminal because resubmitting the same
/// transaction fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The transaction's blockhash is no longer in the validity window
    BlockhashExpired,
    /// The node or program rejected the request
    Rejected(String),
    /// The endpoint could not be reached
    Unavailable(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlockhashExpired => write!(f, "Blockhash not found"),
            Self::Rejected(msg) => write!(f, "Rejected: {}", msg),
            Self::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// RPC operations the token-creation flow depends on.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches a blockhash valid for signing a new transaction.
    async fn latest_blockhash(&self) -> Result<Hash, TransportError>;

    /// Submits a fully signed transaction in wire format and returns its
    /// signature.
    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, TransportError>;

    /// Reads raw account data. `Ok(None)` means the account does not exist.
    async fn get_account_data(&self, address: &Pubkey)
        -> Result<Option<Vec<u8>>, TransportError>;
}

/// Production [`Transport`] backed by a JSON-RPC endpoint.
pub struct RpcTransport {
    rpc: Arc<RpcClient>,
    commitment: CommitmentConfig,
}

impl RpcTransport {
    /// Creates a transport for the given HTTP endpoint and commitment level.
    pub fn new(url: String, commitment: CommitmentConfig) -> Self {
        let rpc = Arc::new(RpcClient::new_with_commitment(url, commitment));
        Self { rpc, commitment }
    }
}

#[async_trait]
impl Transport for RpcTransport {
    async fn latest_blockhash(&self) -> Result<Hash, TransportError> {
        self.rpc.get_latest_blockhash().await.map_err(classify)
    }

    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, TransportError> {
        let encoded = BASE64_STANDARD.encode(wire);
        let signature: String = self
            .rpc
            .send(
                RpcRequest::SendTransaction,
                json!([encoded, {"encoding": "base64"}]),
            )
            .await
            .map_err(classify)?;

        signature
            .parse::<Signature>()
            .map_err(|err| TransportError::Rejected(format!("invalid signature returned: {}", err)))
    }

    async fn get_account_data(
        &self,
        address: &Pubkey,
    ) -> Result<Option<Vec<u8>>, TransportError> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.commitment)
            .await
            .map_err(classify)?;

        Ok(response.value.map(|account| account.data))
    }
}

/// Maps an RPC client error onto the retry-relevant taxonomy.
fn classify(err: RpcClientError) -> TransportError {
    if let Some(TransactionError::BlockhashNotFound) = err.get_transaction_error() {
        return TransportError::BlockhashExpired;
    }

    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => {
            TransportError::Unavailable(err.to_string())
        }
        ClientErrorKind::RpcError(_) => {
            let msg = err.to_string();
            // Some nodes only surface expiry through the error message.
            if msg.contains("Blockhash not found") {
                TransportError::BlockhashExpired
            } else {
                TransportError::Rejected(msg)
            }
        }
        _ => TransportError::Rejected(err.to_string()),
    }
}
