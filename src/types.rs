use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// One named wallet as persisted in the store. `address` is a projection of
/// `mnemonic`: re-running the derivation on the phrase must reproduce it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub name: String,
    pub mnemonic: String,
    pub address: String,
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("name", &self.name)
            .field("mnemonic", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

pub struct SecureSeed {
    seed: Zeroizing<[u8; 64]>,
}

impl SecureSeed {
    pub fn new(seed: [u8; 64]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seed[..]
    }
}

impl Zeroize for SecureSeed {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}
