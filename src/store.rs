use std::fs;
use std::path::PathBuf;

use bitcoin::Network;

use crate::derive;
use crate::error::WalletError;
use crate::mnemonic;
use crate::types::WalletRecord;
use crate::utils::set_secure_file_permissions;

pub struct WalletStore {
    path: Option<PathBuf>,
    network: Network,
    wallets: Vec<WalletRecord>,
}

impl WalletStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unparseable file is a fatal error, never silently reset.
    pub fn open(path: impl Into<PathBuf>, network: Network) -> Result<Self, WalletError> {
        let path = path.into();
        let wallets = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(WalletError::StorageRead)?;
            serde_json::from_str(&contents).map_err(WalletError::StorageCorrupt)?
        } else {
            Vec::new()
        };
        Ok(Self {
            path: Some(path),
            network,
            wallets,
        })
    }

    /// An in-memory store that never touches disk.
    pub fn ephemeral(network: Network) -> Self {
        Self {
            path: None,
            network,
            wallets: Vec::new(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn wallets(&self) -> &[WalletRecord] {
        &self.wallets
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&WalletRecord> {
        self.wallets.iter().find(|w| w.name == name)
    }

    /// Generates a fresh mnemonic, derives its address, appends, and
    /// persists the full updated list.
    pub fn create(&mut self, name: &str, words: u32) -> Result<WalletRecord, WalletError> {
        self.check_name_free(name)?;
        let generated = mnemonic::generate(words)?;
        self.append(name, generated.phrase().to_string())
    }

    /// Validates and imports an externally supplied phrase. An invalid
    /// phrase or duplicate name leaves the store untouched.
    pub fn import(&mut self, phrase: &str, name: &str) -> Result<WalletRecord, WalletError> {
        self.check_name_free(name)?;
        let parsed = mnemonic::parse(phrase)?;
        self.append(name, parsed.phrase().to_string())
    }

    fn check_name_free(&self, name: &str) -> Result<(), WalletError> {
        if self.find_by_name(name).is_some() {
            return Err(WalletError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn append(&mut self, name: &str, phrase: String) -> Result<WalletRecord, WalletError> {
        let address = derive::derive_address(self.network, &phrase, "")?;
        let record = WalletRecord {
            name: name.to_string(),
            mnemonic: phrase,
            address,
        };
        self.wallets.push(record.clone());
        if let Err(e) = self.persist() {
            // keep memory consistent with the untouched file
            self.wallets.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// Rewrites the whole record list: serialize, write to a temp file,
    /// rename over the target. A failed write leaves the old file intact.
    pub fn persist(&self) -> Result<(), WalletError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json =
            serde_json::to_string_pretty(&self.wallets).map_err(|e| WalletError::StorageWrite(e.into()))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(WalletError::StorageWrite)?;
        set_secure_file_permissions(&tmp).map_err(WalletError::StorageWrite)?;
        fs::rename(&tmp, path).map_err(WalletError::StorageWrite)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PHRASE_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ADDR_12_TESTNET: &str = "mr5726L6a5iGCWTFwP465s2ju12t19sE8P";

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("wallets.json")
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = WalletStore::open(store_path(&dir), Network::Testnet).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "{ not json [").unwrap();
        let err = WalletStore::open(&path, Network::Testnet);
        assert!(matches!(err, Err(WalletError::StorageCorrupt(_))));
        // the broken file must survive untouched for inspection
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json [");
    }

    #[test]
    fn import_derives_known_address() {
        let mut store = WalletStore::ephemeral(Network::Testnet);
        let record = store.import(PHRASE_12, "alice").unwrap();
        assert_eq!(record.address, ADDR_12_TESTNET);
        assert_eq!(store.find_by_name("alice").unwrap().address, ADDR_12_TESTNET);
    }

    #[test]
    fn invalid_import_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = WalletStore::open(&path, Network::Testnet).unwrap();
        let err = store.import("zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo", "bob");
        assert!(matches!(err, Err(WalletError::InvalidMnemonic)));
        assert!(store.find_by_name("bob").is_none());
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut store = WalletStore::ephemeral(Network::Testnet);
        store.create("alice", 12).unwrap();
        assert!(matches!(
            store.create("alice", 12),
            Err(WalletError::DuplicateName(name)) if name == "alice"
        ));
        assert!(matches!(
            store.import(PHRASE_12, "alice"),
            Err(WalletError::DuplicateName(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let created = {
            let mut store = WalletStore::open(&path, Network::Testnet).unwrap();
            store.create("alice", 12).unwrap()
        };
        assert_eq!(created.mnemonic.split_whitespace().count(), 12);

        let reloaded = WalletStore::open(&path, Network::Testnet).unwrap();
        let record = reloaded.find_by_name("alice").unwrap();
        assert_eq!(record.mnemonic, created.mnemonic);
        assert_eq!(record.address, created.address);
        // the address field is a pure projection of the phrase
        assert_eq!(
            derive::derive_address(Network::Testnet, &record.mnemonic, "").unwrap(),
            record.address
        );
    }

    #[test]
    fn persist_without_mutation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        {
            let mut store = WalletStore::open(&path, Network::Testnet).unwrap();
            store.import(PHRASE_12, "alice").unwrap();
        }
        let before = fs::read_to_string(&path).unwrap();
        let store = WalletStore::open(&path, Network::Testnet).unwrap();
        store.persist().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn no_stray_temp_file_after_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = WalletStore::open(&path, Network::Testnet).unwrap();
        store.create("alice", 12).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
