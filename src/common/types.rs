//! Common types for the token-creation client
//!
//! This module provides the value types that cross the client boundary:
//!
//! - Cluster configuration for selecting a Solana network
//! - Parameters for a token-creation request
//! - The result record returned once a creation attempt terminates

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};

/// Configuration for connecting to a Solana cluster
///
/// # Fields
///
/// * `rpc_url` - HTTP endpoint URL for JSON RPC requests
/// * `commitment` - Commitment level for confirmations
#[derive(Debug, Clone)]
pub struct Cluster {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
}

impl Cluster {
    /// Creates a new cluster configuration with a custom endpoint
    pub fn new(rpc_url: String, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_url,
            commitment,
        }
    }

    /// Creates a configuration for the Solana mainnet-beta cluster
    pub fn mainnet(commitment: CommitmentConfig) -> Self {
        Self::new(
            "https://api.mainnet-beta.solana.com".to_string(),
            commitment,
        )
    }

    /// Creates a configuration for the Solana devnet cluster
    pub fn devnet(commitment: CommitmentConfig) -> Self {
        Self::new("https://api.devnet.solana.com".to_string(), commitment)
    }

    /// Creates a configuration for the Solana testnet cluster
    pub fn testnet(commitment: CommitmentConfig) -> Self {
        Self::new("https://api.testnet.solana.com".to_string(), commitment)
    }

    /// Creates a configuration for a local Solana validator
    pub fn localnet(commitment: CommitmentConfig) -> Self {
        Self::new("http://localhost:8899".to_string(), commitment)
    }
}

/// Parameters for a token-creation request
///
/// # Fields
///
/// * `name` - Token name, at most 32 bytes
/// * `symbol` - Token symbol, at most 10 bytes
/// * `uri` - Metadata URI, at most 200 bytes. Treated as an opaque UTF-8
///   string; see [`crate::utils::upload_token_metadata`] for producing one
/// * `creator` - Creator recorded on-chain; defaults to the payer when `None`
/// * `initial_buy_sol` - SOL to spend on an initial dev buy bundled atomically
///   with the creation. Zero skips the buy entirely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub creator: Option<Pubkey>,
    pub initial_buy_sol: f64,
}

impl CreateTokenParams {
    /// Creation without an initial buy.
    pub fn new(name: String, symbol: String, uri: String) -> Self {
        Self {
            name,
            symbol,
            uri,
            creator: None,
            initial_buy_sol: 0.0,
        }
    }
}

/// Outcome of a successful token creation
///
/// Immutable once produced; every field refers to state that is now on-chain.
#[derive(Debug, Clone)]
pub struct CreationResult {
    /// Address of the newly created mint
    pub mint: Pubkey,
    /// Address of the token's bonding curve account
    pub bonding_curve: Pubkey,
    /// Signature of the landed transaction
    pub signature: Signature,
    /// Lamports committed to the initial buy, zero when no buy was bundled
    pub initial_buy_lamports: u64,
}
