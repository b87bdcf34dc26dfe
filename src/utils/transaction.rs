//! Transaction assembly and wire serialization.

use solana_sdk::{
    hash::Hash, instruction::Instruction, signature::Keypair, signer::Signer,
    transaction::Transaction,
};

use crate::error::ClientError;

/// Builds and signs a legacy transaction over the given instructions.
///
/// The blockhash must be freshly fetched; a bundle is signed once and either
/// submitted or discarded, never re-signed with a new hash.
///
/// # Arguments
///
/// * `payer` - Fee payer; always the first signer
/// * `additional_signers` - Further required signers (the mint keypair for a
///   creation bundle)
/// * `instructions` - Instructions to execute atomically, in order
/// * `recent_blockhash` - Blockhash anchoring the transaction's validity window
pub fn build_signed_transaction(
    payer: &Keypair,
    additional_signers: &[&Keypair],
    instructions: &[Instruction],
    recent_blockhash: Hash,
) -> Transaction {
    let mut all_signers = Vec::with_capacity(1 + additional_signers.len());
    all_signers.push(payer);
    all_signers.extend(additional_signers);

    Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        recent_blockhash,
    )
}

/// Serializes a signed transaction into the canonical wire format accepted by
/// `sendTransaction`.
pub fn serialize_transaction(transaction: &Transaction) -> Result<Vec<u8>, ClientError> {
    bincode::serialize(transaction).map_err(ClientError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_instruction;

    #[test]
    fn signs_with_payer_and_additional_signers() {
        let payer = Keypair::new();
        let mint = Keypair::new();
        let ix = system_instruction::transfer(&payer.pubkey(), &mint.pubkey(), 1);
        let tx = build_signed_transaction(&payer, &[&mint], &[ix], Hash::new_unique());

        assert_eq!(tx.message.account_keys[0], payer.pubkey());
        assert_eq!(tx.signatures.len(), 1 + 1);
    }

    #[test]
    fn wire_format_round_trips() {
        let payer = Keypair::new();
        let ix = system_instruction::transfer(&payer.pubkey(), &payer.pubkey(), 1);
        let tx = build_signed_transaction(&payer, &[], &[ix], Hash::new_unique());

        let wire = serialize_transaction(&tx).unwrap();
        let decoded: Transaction = bincode::deserialize(&wire).unwrap();
        assert_eq!(decoded, tx);
    }
}
