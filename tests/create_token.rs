//! End-to-end tests of the creation flow against an in-process transport
//! stub, covering bundle shape, the retry loop, and fee-recipient fallback.

use async_trait::async_trait;
use pump_creator::{
    common::types::{Cluster, CreateTokenParams},
    constants,
    error::ClientError,
    instructions::Buy,
    transport::{Transport, TransportError},
    PumpCreator,
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::{
    collections::{HashSet, VecDeque},
    sync::{Arc, Mutex},
};

/// Scriptable [`Transport`] that records every submission.
#[derive(Default)]
struct StubTransport {
    /// Outcome per submission, front to back; `Ok(sig)` once empty.
    submit_script: Mutex<VecDeque<Result<Signature, TransportError>>>,
    /// Wire bytes of every submitted transaction.
    submissions: Mutex<Vec<Vec<u8>>>,
    /// Number of blockhash fetches served.
    hashes_served: Mutex<u32>,
    /// Data returned for any account read.
    global_data: Option<Vec<u8>>,
}

impl StubTransport {
    fn failing_with(failures: Vec<TransportError>) -> Self {
        Self {
            submit_script: Mutex::new(failures.into_iter().map(Err).collect()),
            ..Self::default()
        }
    }

    fn submitted_transactions(&self) -> Vec<Transaction> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .map(|wire| bincode::deserialize(wire).expect("submitted wire must decode"))
            .collect()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn latest_blockhash(&self) -> Result<Hash, TransportError> {
        *self.hashes_served.lock().unwrap() += 1;
        Ok(Hash::new_unique())
    }

    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<Signature, TransportError> {
        self.submissions.lock().unwrap().push(wire.to_vec());
        self.submit_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Signature::new_unique()))
    }

    async fn get_account_data(
        &self,
        _address: &Pubkey,
    ) -> Result<Option<Vec<u8>>, TransportError> {
        Ok(self.global_data.clone())
    }
}

fn client_with(transport: Arc<StubTransport>) -> PumpCreator {
    PumpCreator::with_transport(
        Arc::new(Keypair::new()),
        Cluster::localnet(CommitmentConfig::confirmed()),
        transport,
    )
}

fn params() -> CreateTokenParams {
    CreateTokenParams::new(
        "Cat On Horse".to_string(),
        "COH".to_string(),
        "https://gateway.pinata.cloud/ipfs/QmExample".to_string(),
    )
}

fn global_account_data(fee_recipient: &Pubkey) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&1u64.to_le_bytes());
    data.push(1);
    data.extend_from_slice(Pubkey::new_unique().as_ref());
    data.extend_from_slice(fee_recipient.as_ref());
    data
}

fn instruction_program_ids(tx: &Transaction) -> Vec<Pubkey> {
    tx.message
        .instructions
        .iter()
        .map(|ix| tx.message.account_keys[ix.program_id_index as usize])
        .collect()
}

#[tokio::test]
async fn zero_buy_produces_single_instruction_bundle() {
    let transport = Arc::new(StubTransport::default());
    let client = client_with(transport.clone());

    let result = client.create_token(params()).await.unwrap();
    assert_eq!(result.initial_buy_lamports, 0);

    let transactions = transport.submitted_transactions();
    assert_eq!(transactions.len(), 1);

    let tx = &transactions[0];
    assert_eq!(
        instruction_program_ids(tx),
        vec![constants::accounts::PUMPFUN]
    );
    // Signed by the payer and the mint identity.
    assert_eq!(tx.signatures.len(), 2);
    assert_eq!(tx.message.account_keys[0], client.payer.pubkey());
    assert_eq!(tx.message.account_keys[1], result.mint);
}

#[tokio::test]
async fn dev_buy_bundles_create_ata_and_buy() {
    let fee_recipient = Pubkey::new_unique();
    let transport = Arc::new(StubTransport {
        global_data: Some(global_account_data(&fee_recipient)),
        ..StubTransport::default()
    });
    let client = client_with(transport.clone());

    let mut request = params();
    request.initial_buy_sol = 0.5;
    let result = client.create_token(request).await.unwrap();
    assert_eq!(result.initial_buy_lamports, 500_000_000);

    let transactions = transport.submitted_transactions();
    assert_eq!(transactions.len(), 1);
    let tx = &transactions[0];

    assert_eq!(
        instruction_program_ids(tx),
        vec![
            constants::accounts::PUMPFUN,
            constants::accounts::ASSOCIATED_TOKEN_PROGRAM,
            constants::accounts::PUMPFUN,
        ]
    );

    // The buy payload carries the converted lamport ceiling.
    let buy_ix = &tx.message.instructions[2];
    assert_eq!(&buy_ix.data[..8], &Buy::DISCRIMINATOR);
    assert_eq!(
        &buy_ix.data[8..16],
        &constants::trade::DEFAULT_BUY_TOKEN_AMOUNT.to_le_bytes()
    );
    assert_eq!(&buy_ix.data[16..24], &500_000_000u64.to_le_bytes());

    // Fee recipient resolved from the global account, second buy account.
    let fee_recipient_index = buy_ix.accounts[1] as usize;
    assert_eq!(tx.message.account_keys[fee_recipient_index], fee_recipient);
}

#[tokio::test]
async fn short_global_data_falls_back_to_default_fee_recipient() {
    let transport = Arc::new(StubTransport {
        global_data: Some(vec![0u8; 72]),
        ..StubTransport::default()
    });
    let client = client_with(transport.clone());

    let mut request = params();
    request.initial_buy_sol = 0.1;
    client.create_token(request).await.unwrap();

    let tx = &transport.submitted_transactions()[0];
    let buy_ix = &tx.message.instructions[2];
    let fee_recipient_index = buy_ix.accounts[1] as usize;
    assert_eq!(
        tx.message.account_keys[fee_recipient_index],
        constants::accounts::DEFAULT_FEE_RECIPIENT
    );
}

#[tokio::test(start_paused = true)]
async fn retry_stops_after_three_attempts() {
    let transport = Arc::new(StubTransport::failing_with(vec![
        TransportError::BlockhashExpired,
        TransportError::BlockhashExpired,
        TransportError::BlockhashExpired,
    ]));
    let client = client_with(transport.clone());

    let err = client.create_token(params()).await.unwrap_err();
    assert!(matches!(err, ClientError::MaxAttemptsReached));
    assert_eq!(err.to_string(), "Maximum number of attempts reached");

    // Exactly three full build/sign/submit cycles, no more.
    assert_eq!(transport.submissions.lock().unwrap().len(), 3);
    assert_eq!(*transport.hashes_served.lock().unwrap(), 3);
}

#[tokio::test(start_paused = true)]
async fn retry_succeeds_on_third_attempt_with_fresh_state() {
    let transport = Arc::new(StubTransport::failing_with(vec![
        TransportError::BlockhashExpired,
        TransportError::BlockhashExpired,
    ]));
    let client = client_with(transport.clone());

    let result = client.create_token(params()).await.unwrap();

    let transactions = transport.submitted_transactions();
    assert_eq!(transactions.len(), 3);

    // Each attempt used a fresh mint identity and a fresh blockhash.
    let mints: HashSet<Pubkey> = transactions
        .iter()
        .map(|tx| tx.message.account_keys[1])
        .collect();
    assert_eq!(mints.len(), 3);

    let blockhashes: HashSet<Hash> = transactions
        .iter()
        .map(|tx| tx.message.recent_blockhash)
        .collect();
    assert_eq!(blockhashes.len(), 3);

    // The result reflects the attempt that landed.
    assert_eq!(transactions[2].message.account_keys[1], result.mint);
}

#[tokio::test]
async fn rejection_is_terminal() {
    let transport = Arc::new(StubTransport::failing_with(vec![TransportError::Rejected(
        "insufficient funds".to_string(),
    )]));
    let client = client_with(transport.clone());

    let err = client.create_token(params()).await.unwrap_err();
    assert!(matches!(err, ClientError::ProtocolRejection(_)));
    assert_eq!(transport.submissions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn validation_happens_before_any_network_call() {
    let transport = Arc::new(StubTransport::default());
    let client = client_with(transport.clone());

    let mut request = params();
    request.symbol = "TOOLONGSYMBOL".to_string();
    let err = client.create_token(request).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(*transport.hashes_served.lock().unwrap(), 0);
    assert!(transport.submissions.lock().unwrap().is_empty());
}
