//! Protocol constants for the Pump.fun program on mainnet.
//!
//! Every pubkey and seed literal below is part of the program's ABI and must
//! be used verbatim; none of them are derivable at runtime.

/// Seed literals used for program derived addresses.
pub mod seeds {
    /// Seed for the global state account.
    pub const GLOBAL_SEED: &[u8] = b"global";

    /// Seed prefix for bonding curve accounts.
    pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";

    /// Seed for the mint authority account.
    pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

    /// Seed prefix for Metaplex metadata accounts.
    pub const METADATA_SEED: &[u8] = b"metadata";
}

/// Program and sysvar addresses referenced by the instruction account lists.
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// Pump.fun program.
    pub const PUMPFUN: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");

    /// Metaplex Token Metadata program.
    pub const MPL_TOKEN_METADATA: Pubkey =
        pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

    /// SPL Token program.
    pub const TOKEN_PROGRAM: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

    /// SPL Associated Token Account program.
    pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey =
        pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

    /// System program.
    pub const SYSTEM_PROGRAM: Pubkey = pubkey!("11111111111111111111111111111111");

    /// Rent sysvar.
    pub const RENT: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

    /// Pump.fun event authority.
    pub const EVENT_AUTHORITY: Pubkey = pubkey!("Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1");

    /// Fee recipient used when the global account cannot be read. Assumed to
    /// still be the active protocol fee account; confirm against on-chain
    /// state before relying on it for large buys.
    pub const DEFAULT_FEE_RECIPIENT: Pubkey =
        pubkey!("CebN5WGQ4jvEPvsVU4EoHEpgzq1VV7AbicfhtW4xC9iM");
}

/// Limits and scales fixed by the target programs.
pub mod trade {
    /// Metaplex limit on token names, in bytes.
    pub const MAX_NAME_LENGTH: usize = 32;

    /// Metaplex limit on token symbols, in bytes.
    pub const MAX_SYMBOL_LENGTH: usize = 10;

    /// Metaplex limit on metadata URIs, in bytes.
    pub const MAX_URI_LENGTH: usize = 200;

    /// Lamports per SOL.
    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    /// Decimal places of Pump.fun mints.
    pub const TOKEN_DECIMALS: u8 = 6;

    /// Token amount requested by the initial dev buy: one whole token in
    /// smallest units. The SOL ceiling supplied by the caller is what bounds
    /// the actual spend.
    pub const DEFAULT_BUY_TOKEN_AMOUNT: u64 = 1_000_000;
}
