//! Client for launching bonding-curve tokens on the Pump.fun Solana program.
//!
//! The crate covers the hard part of a launch: deriving every program
//! address the fixed on-chain program expects, encoding the `create` and
//! `buy` instruction payloads byte-exactly, bundling them atomically with the
//! associated-token-account creation when an initial dev buy is requested,
//! and driving the submit/retry loop against blockhash expiry.
//!
//! Metadata pinning, keypair management, and any interactive surface are
//! collaborators around this core; the client consumes the metadata URI as an
//! opaque string and talks to the chain through the narrow
//! [`transport::Transport`] boundary.
//!
//! # Examples
//!
//! ```no_run
//! use pump_creator::{common::types::{Cluster, CreateTokenParams}, PumpCreator};
//! use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let payer = Arc::new(Keypair::new());
//! let client = PumpCreator::new(payer, Cluster::mainnet(CommitmentConfig::confirmed()));
//!
//! let mut params = CreateTokenParams::new(
//!     "My Token".to_string(),
//!     "MYTKN".to_string(),
//!     "https://gateway.pinata.cloud/ipfs/QmExample".to_string(),
//! );
//! params.initial_buy_sol = 0.5;
//!
//! let result = client.create_token(params).await?;
//! println!("Mint: {}", result.mint);
//! println!("Bonding curve: {}", result.bonding_curve);
//! println!("Signature: {}", result.signature);
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod common;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod transport;
pub mod utils;

use common::types::{Cluster, CreateTokenParams, CreationResult};
use error::ClientError;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer};
use spl_associated_token_account::get_associated_token_address;
use std::sync::Arc;
use std::time::Duration;
use transport::{RpcTransport, Transport};
use utils::transaction::{build_signed_transaction, serialize_transaction};

/// Maximum total build/sign/submit cycles per creation request.
pub const MAX_CREATE_ATTEMPTS: u32 = 3;

/// Pause between attempts after a retryable failure. Scoped to the single
/// request; other tasks on the runtime keep making progress.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Addresses derived for one mint, computed once per creation attempt.
///
/// Derivation is pure: the same mint always yields the same set. Every
/// address here is program-derived and therefore non-signable.
#[derive(Debug, Clone)]
pub struct TokenAddresses {
    /// The mint itself
    pub mint: Pubkey,
    /// Global configuration PDA
    pub global: Pubkey,
    /// Bonding curve PDA for this mint
    pub bonding_curve: Pubkey,
    /// The bonding curve's associated token account
    pub associated_bonding_curve: Pubkey,
    /// Mint authority PDA shared by all Pump.fun tokens
    pub mint_authority: Pubkey,
    /// Metaplex metadata PDA for this mint
    pub metadata: Pubkey,
}

impl TokenAddresses {
    /// Derives the full address set for a mint.
    ///
    /// Fails only when no bonding curve PDA exists in the bump-seed search
    /// space, which indicates corrupted protocol constants rather than a
    /// transient condition.
    pub fn derive(mint: &Pubkey) -> Result<Self, ClientError> {
        let bonding_curve =
            PumpCreator::get_bonding_curve_pda(mint).ok_or(ClientError::DerivationFailure)?;

        Ok(Self {
            mint: *mint,
            global: PumpCreator::get_global_pda(),
            associated_bonding_curve: get_associated_token_address(&bonding_curve, mint),
            bonding_curve,
            mint_authority: PumpCreator::get_mint_authority_pda(),
            metadata: PumpCreator::get_metadata_pda(mint),
        })
    }
}

/// Client for creating tokens on the Pump.fun program
///
/// Holds the fee-payer identity and the transport used to reach the chain.
/// Each call to [`PumpCreator::create_token`] is self-contained: it generates
/// a fresh mint identity per attempt and never shares state with concurrent
/// requests beyond the read-only protocol constants.
pub struct PumpCreator {
    /// Keypair that pays fees and owns the initial buy
    pub payer: Arc<Keypair>,
    /// RPC boundary; swap for a stub in tests
    pub transport: Arc<dyn Transport>,
    /// Cluster configuration
    pub cluster: Cluster,
}

impl PumpCreator {
    /// Creates a client connected to the given cluster over JSON-RPC.
    pub fn new(payer: Arc<Keypair>, cluster: Cluster) -> Self {
        let transport = Arc::new(RpcTransport::new(
            cluster.rpc_url.clone(),
            cluster.commitment,
        ));

        Self {
            payer,
            transport,
            cluster,
        }
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(
        payer: Arc<Keypair>,
        cluster: Cluster,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            payer,
            transport,
            cluster,
        }
    }

    /// Creates a new token, optionally bundled atomically with an initial buy.
    ///
    /// Validates the request, then runs up to [`MAX_CREATE_ATTEMPTS`]
    /// build/sign/submit cycles. Every attempt starts from scratch: a fresh
    /// mint keypair, freshly derived addresses, and a freshly fetched
    /// blockhash, so nothing from a failed attempt leaks into the next.
    ///
    /// Only blockhash expiry and endpoint unavailability are retried. A
    /// program-level rejection would fail identically on resubmission and is
    /// returned immediately.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] for oversized name/symbol/uri or a
    ///   negative buy amount, before any network call
    /// - [`ClientError::ProtocolRejection`] when the program rejects the
    ///   transaction
    /// - [`ClientError::MaxAttemptsReached`] when the retry budget runs out
    pub async fn create_token(
        &self,
        params: CreateTokenParams,
    ) -> Result<CreationResult, ClientError> {
        validate_params(&params)?;
        let initial_buy_lamports = utils::sol_to_lamports(params.initial_buy_sol);

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            // Everything about an attempt is scoped to this iteration; a
            // failed attempt leaves nothing behind for the next one.
            let mint = Keypair::new();
            match self.try_create(&mint, &params, initial_buy_lamports).await {
                Ok(result) => return Ok(result),
                Err(err) if is_retryable(&err) => {
                    log::warn!(
                        "attempt {} of {} failed: {}",
                        attempt,
                        MAX_CREATE_ATTEMPTS,
                        err
                    );
                    if attempt < MAX_CREATE_ATTEMPTS {
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        Err(ClientError::MaxAttemptsReached)
    }

    /// One full build/sign/submit cycle for a single mint identity.
    async fn try_create(
        &self,
        mint: &Keypair,
        params: &CreateTokenParams,
        initial_buy_lamports: u64,
    ) -> Result<CreationResult, ClientError> {
        let addresses = TokenAddresses::derive(&mint.pubkey())?;
        let instructions = self
            .build_creation_bundle(&addresses, params, initial_buy_lamports)
            .await?;

        // Fetched immediately before signing; never cached across attempts.
        let recent_blockhash = self.transport.latest_blockhash().await?;
        let transaction =
            build_signed_transaction(&self.payer, &[mint], &instructions, recent_blockhash);
        let wire = serialize_transaction(&transaction)?;

        let signature = self.transport.send_raw_transaction(&wire).await?;

        Ok(CreationResult {
            mint: mint.pubkey(),
            bonding_curve: addresses.bonding_curve,
            signature,
            initial_buy_lamports,
        })
    }

    /// Assembles the instruction bundle for one creation attempt.
    ///
    /// Always starts with the create instruction. A positive buy amount adds
    /// the buyer's associated-token-account creation and the buy itself, in
    /// that order, so the whole launch lands or fails as one transaction.
    pub async fn build_creation_bundle(
        &self,
        addresses: &TokenAddresses,
        params: &CreateTokenParams,
        initial_buy_lamports: u64,
    ) -> Result<Vec<Instruction>, ClientError> {
        let payer = self.payer.pubkey();
        let creator = params.creator.unwrap_or(payer);

        let mut bundle = vec![instructions::create(
            &payer,
            addresses,
            instructions::Create {
                name: params.name.clone(),
                symbol: params.symbol.clone(),
                uri: params.uri.clone(),
                creator,
            },
        )];

        if initial_buy_lamports > 0 {
            let fee_recipient = self.resolve_fee_recipient().await;

            // The mint is brand new, so the buyer's token account cannot
            // exist yet.
            bundle.push(instructions::create_associated_token_account(
                &payer,
                &payer,
                &addresses.mint,
            ));
            bundle.push(instructions::buy(
                &payer,
                &fee_recipient,
                addresses,
                instructions::Buy {
                    amount: constants::trade::DEFAULT_BUY_TOKEN_AMOUNT,
                    max_sol_cost: initial_buy_lamports,
                },
            ));
        }

        Ok(bundle)
    }

    /// Resolves the protocol fee recipient from the global account.
    ///
    /// Any failure along the way (unreachable endpoint, absent account,
    /// malformed data) falls back to the fixed default recipient and the
    /// bundle proceeds.
    pub async fn resolve_fee_recipient(&self) -> Pubkey {
        let data = match self
            .transport
            .get_account_data(&Self::get_global_pda())
            .await
        {
            Ok(data) => data,
            Err(err) => {
                log::warn!("failed to read global account: {}", err);
                None
            }
        };

        accounts::fee_recipient_or_default(data.as_deref())
    }

    /// Gets the Program Derived Address (PDA) for the global state account
    pub fn get_global_pda() -> Pubkey {
        let seeds: &[&[u8]; 1] = &[constants::seeds::GLOBAL_SEED];
        let program_id: &Pubkey = &constants::accounts::PUMPFUN;
        Pubkey::find_program_address(seeds, program_id).0
    }

    /// Gets the Program Derived Address (PDA) for the mint authority
    pub fn get_mint_authority_pda() -> Pubkey {
        let seeds: &[&[u8]; 1] = &[constants::seeds::MINT_AUTHORITY_SEED];
        let program_id: &Pubkey = &constants::accounts::PUMPFUN;
        Pubkey::find_program_address(seeds, program_id).0
    }

    /// Gets the Program Derived Address (PDA) for a token's bonding curve
    /// account
    ///
    /// Returns `None` when no valid derivation exists within the bump-seed
    /// search space.
    pub fn get_bonding_curve_pda(mint: &Pubkey) -> Option<Pubkey> {
        let seeds: &[&[u8]; 2] = &[constants::seeds::BONDING_CURVE_SEED, mint.as_ref()];
        let program_id: &Pubkey = &constants::accounts::PUMPFUN;
        let pda: Option<(Pubkey, u8)> = Pubkey::try_find_program_address(seeds, program_id);
        pda.map(|pubkey| pubkey.0)
    }

    /// Gets the Program Derived Address (PDA) for a token's metadata account,
    /// following the Metaplex Token Metadata standard
    pub fn get_metadata_pda(mint: &Pubkey) -> Pubkey {
        let seeds: &[&[u8]; 3] = &[
            constants::seeds::METADATA_SEED,
            constants::accounts::MPL_TOKEN_METADATA.as_ref(),
            mint.as_ref(),
        ];
        let program_id: &Pubkey = &constants::accounts::MPL_TOKEN_METADATA;
        Pubkey::find_program_address(seeds, program_id).0
    }
}

/// Rejects malformed requests before any network interaction.
fn validate_params(params: &CreateTokenParams) -> Result<(), ClientError> {
    if params.name.len() > constants::trade::MAX_NAME_LENGTH {
        return Err(ClientError::Validation(format!(
            "name exceeds {} bytes",
            constants::trade::MAX_NAME_LENGTH
        )));
    }
    if params.symbol.len() > constants::trade::MAX_SYMBOL_LENGTH {
        return Err(ClientError::Validation(format!(
            "symbol exceeds {} bytes",
            constants::trade::MAX_SYMBOL_LENGTH
        )));
    }
    if params.uri.len() > constants::trade::MAX_URI_LENGTH {
        return Err(ClientError::Validation(format!(
            "uri exceeds {} bytes",
            constants::trade::MAX_URI_LENGTH
        )));
    }
    if !params.initial_buy_sol.is_finite() || params.initial_buy_sol < 0.0 {
        return Err(ClientError::Validation(
            "initial buy amount must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// Whether the orchestrator should rebuild and resubmit after this failure.
fn is_retryable(err: &ClientError) -> bool {
    matches!(
        err,
        ClientError::BlockhashExpired | ClientError::TransientNetwork(_)
    )
}
