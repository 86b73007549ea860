use bitcoin::Network;

pub const WALLET_DIR: &str = ".bwm";
pub const WALLET_FILE: &str = "wallets.json";

// one network configuration for the whole system
pub const NETWORK: Network = Network::Testnet;

pub const PBKDF2_ROUNDS: u32 = 2048;
pub const SEED_SIZE: usize = 64;

pub const EXPLORER_URL: &str = "https://api.blockcypher.com/v1";
pub const EXPLORER_CHAIN: &str = "btc/test3";
pub const EXPLORER_TOKEN_VAR: &str = "BLOCKCYPHER_TOKEN";

pub const SATS_PER_BTC: u64 = 100_000_000;
