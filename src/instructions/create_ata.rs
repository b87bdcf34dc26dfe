//! Instruction for creating an associated token account
//!
//! Needed only when a buy is bundled with the creation: the buyer's token
//! account does not exist yet for a freshly generated mint, so it is created
//! in the same transaction, between the create and buy instructions.

use crate::constants;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use spl_associated_token_account::get_associated_token_address;

/// Creates an instruction to create the owner's associated token account for
/// a mint
///
/// The instruction carries no payload; the associated token program identifies
/// the operation from the account list alone.
///
/// # Account Requirements
///
/// The instruction requires the following accounts in this order:
/// 1. Funding account (signer, writable)
/// 2. Associated token account to create (writable)
/// 3. Wallet owner (readonly)
/// 4. Token mint (readonly)
/// 5. System program (readonly)
/// 6. Token program (readonly)
/// 7. Rent sysvar (readonly)
pub fn create_associated_token_account(
    funder: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    let associated_account = get_associated_token_address(owner, mint);
    Instruction::new_with_bytes(
        constants::accounts::ASSOCIATED_TOKEN_PROGRAM,
        &[],
        vec![
            AccountMeta::new(*funder, true),
            AccountMeta::new(associated_account, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(constants::accounts::SYSTEM_PROGRAM, false),
            AccountMeta::new_readonly(constants::accounts::TOKEN_PROGRAM, false),
            AccountMeta::new_readonly(constants::accounts::RENT, false),
        ],
    )
}
