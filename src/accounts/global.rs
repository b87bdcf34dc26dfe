//! Global state account of the Pump.fun program.
//!
//! The client only needs the leading fields of the account: the fee recipient
//! sits at byte offset 41, after the 8-byte account discriminator, the
//! 1-byte initialized flag, and the 32-byte authority. The account carries
//! more state after that (curve parameters, fee schedule); trailing bytes are
//! ignored on parse so layout growth upstream does not break the read.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants;

/// Leading fields of the global configuration account.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct GlobalSettings {
    /// Account discriminator
    pub discriminator: u64,
    /// Whether the global account has been initialized
    pub initialized: bool,
    /// Authority that can modify global settings
    pub authority: Pubkey,
    /// Account that receives protocol fees
    pub fee_recipient: Pubkey,
}

impl GlobalSettings {
    /// Parses the account prefix, ignoring any trailing bytes.
    ///
    /// Returns `None` when the buffer is shorter than the prefix.
    pub fn from_account_data(data: &[u8]) -> Option<Self> {
        solana_sdk::borsh1::try_from_slice_unchecked::<Self>(data).ok()
    }
}

/// Resolves the protocol fee recipient from raw global-account data.
///
/// Malformed or absent data falls back to the fixed default recipient; the
/// caller continues with the bundle either way.
pub fn fee_recipient_or_default(data: Option<&[u8]>) -> Pubkey {
    match data.and_then(GlobalSettings::from_account_data) {
        Some(settings) => settings.fee_recipient,
        None => {
            log::warn!(
                "global account unreadable, falling back to default fee recipient {}",
                constants::accounts::DEFAULT_FEE_RECIPIENT
            );
            constants::accounts::DEFAULT_FEE_RECIPIENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_bytes(fee_recipient: &Pubkey, trailing: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u64.to_le_bytes());
        data.push(1); // initialized
        data.extend_from_slice(Pubkey::new_unique().as_ref());
        data.extend_from_slice(fee_recipient.as_ref());
        data.extend(std::iter::repeat(0u8).take(trailing));
        data
    }

    #[test]
    fn fee_recipient_read_at_offset_41() {
        let recipient = Pubkey::new_unique();
        let data = global_bytes(&recipient, 0);
        assert_eq!(data.len(), 73);
        assert_eq!(&data[41..73], recipient.as_ref());
        assert_eq!(fee_recipient_or_default(Some(&data)), recipient);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let recipient = Pubkey::new_unique();
        let data = global_bytes(&recipient, 400);
        assert_eq!(fee_recipient_or_default(Some(&data)), recipient);
    }

    #[test]
    fn short_buffer_falls_back_to_default() {
        let recipient = Pubkey::new_unique();
        let mut data = global_bytes(&recipient, 0);
        data.truncate(72);
        assert_eq!(
            fee_recipient_or_default(Some(&data)),
            constants::accounts::DEFAULT_FEE_RECIPIENT
        );
    }

    #[test]
    fn absent_account_falls_back_to_default() {
        assert_eq!(
            fee_recipient_or_default(None),
            constants::accounts::DEFAULT_FEE_RECIPIENT
        );
    }
}
