//! Instruction for buying tokens from bonding curves

use crate::{constants, TokenAddresses};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use spl_associated_token_account::get_associated_token_address;

/// Instruction data for buying tokens from a bonding curve
///
/// # Fields
///
/// * `amount` - Amount of tokens to buy, in token smallest units
/// * `max_sol_cost` - Maximum acceptable cost in lamports (slippage ceiling)
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Buy {
    pub amount: u64,
    pub max_sol_cost: u64,
}

impl Buy {
    /// Instruction discriminator used to identify this instruction
    pub const DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];

    /// Serializes the instruction data with the appropriate discriminator
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(24);
        data.extend_from_slice(&Self::DISCRIMINATOR);
        self.serialize(&mut data).unwrap();
        data
    }
}

/// Creates an instruction to buy tokens from a bonding curve
///
/// Buys tokens by providing SOL. The executed price follows the bonding curve;
/// `max_sol_cost` caps what the buyer is willing to pay. A portion of the SOL
/// goes to the protocol fee recipient.
///
/// # Arguments
///
/// * `payer` - Account providing the SOL
/// * `fee_recipient` - Account receiving the protocol fee
/// * `addresses` - Addresses derived for this mint
/// * `args` - Token amount and maximum acceptable SOL cost
///
/// # Account Requirements
///
/// The instruction requires the following accounts in this order:
/// 1. Global configuration PDA (readonly)
/// 2. Fee recipient account (writable)
/// 3. Token mint account (readonly)
/// 4. Bonding curve PDA (writable)
/// 5. Bonding curve token account (writable)
/// 6. Buyer's token account (writable)
/// 7. Payer account (signer, writable)
/// 8. System program (readonly)
/// 9. Token program (readonly)
/// 10. Rent sysvar (readonly)
/// 11. Event authority (readonly)
/// 12. Pump.fun program ID (readonly)
pub fn buy(
    payer: &Pubkey,
    fee_recipient: &Pubkey,
    addresses: &TokenAddresses,
    args: Buy,
) -> Instruction {
    Instruction::new_with_bytes(
        constants::accounts::PUMPFUN,
        &args.data(),
        vec![
            AccountMeta::new_readonly(addresses.global, false),
            AccountMeta::new(*fee_recipient, false),
            AccountMeta::new_readonly(addresses.mint, false),
            AccountMeta::new(addresses.bonding_curve, false),
            AccountMeta::new(addresses.associated_bonding_curve, false),
            AccountMeta::new(get_associated_token_address(payer, &addresses.mint), false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(constants::accounts::SYSTEM_PROGRAM, false),
            AccountMeta::new_readonly(constants::accounts::TOKEN_PROGRAM, false),
            AccountMeta::new_readonly(constants::accounts::RENT, false),
            AccountMeta::new_readonly(constants::accounts::EVENT_AUTHORITY, false),
            AccountMeta::new_readonly(constants::accounts::PUMPFUN, false),
        ],
    )
}
