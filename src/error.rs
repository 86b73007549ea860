use thiserror::Error;

/// Errors surfaced by wallet creation, derivation, and storage.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The supplied phrase failed BIP39 validation (word count, wordlist
    /// membership, or checksum).
    #[error("invalid mnemonic phrase")]
    InvalidMnemonic,

    /// No wallet with the requested name exists in the store.
    #[error("no wallet named `{0}`")]
    WalletNotFound(String),

    /// A wallet with the requested name already exists.
    #[error("a wallet named `{0}` already exists")]
    DuplicateName(String),

    #[error("word count must be 12 or 24, got {0}")]
    WordCount(u32),

    /// Persisted wallet data exists but cannot be parsed. Fatal at startup;
    /// the store is never silently reset.
    #[error("wallet storage is corrupt: {0}")]
    StorageCorrupt(#[source] serde_json::Error),

    #[error("failed to read wallet storage: {0}")]
    StorageRead(#[source] std::io::Error),

    #[error("failed to write wallet storage: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("could not find home directory")]
    HomeDir,

    #[error("key derivation failed: {0}")]
    Derivation(#[from] bitcoin::bip32::Error),
}
