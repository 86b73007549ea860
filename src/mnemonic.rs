use bip39::{Language, Mnemonic, MnemonicType};

use crate::error::WalletError;

pub fn generate(words: u32) -> Result<Mnemonic, WalletError> {
    let word_count = match words {
        12 => MnemonicType::Words12,
        24 => MnemonicType::Words24,
        _ => return Err(WalletError::WordCount(words)),
    };
    Ok(Mnemonic::new(word_count, Language::English))
}

/// Wordlist and checksum check; false for any malformed input.
pub fn validate(candidate: &str) -> bool {
    Mnemonic::validate(candidate.trim(), Language::English).is_ok()
}

pub fn parse(candidate: &str) -> Result<Mnemonic, WalletError> {
    Mnemonic::from_phrase(candidate.trim(), Language::English)
        .map_err(|_| WalletError::InvalidMnemonic)
}
