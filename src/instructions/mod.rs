//! Instructions submitted to create a token on the Pump.fun program.
//!
//! Each file defines one instruction kind: the borsh argument struct with its
//! 8-byte discriminator, and a builder returning a [`solana_sdk::instruction::Instruction`]
//! with the fixed account list the program expects. Account order is part of
//! the program's ABI; the lists here must never be permuted.
//!
//! # Instructions
//!
//! - `Create`: creates a new token with an associated bonding curve.
//! - `Buy`: buys tokens from a bonding curve by providing SOL.
//! - `create_associated_token_account`: creates the buyer's token account
//!   ahead of the first buy.

mod buy;
mod create;
mod create_ata;

pub use buy::*;
pub use create::*;
pub use create_ata::*;
