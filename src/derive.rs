use bip39::Mnemonic;
use bitcoin::bip32::Xpriv;
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, Network, PrivateKey, PublicKey};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

use crate::constants::{PBKDF2_ROUNDS, SEED_SIZE};
use crate::error::WalletError;
use crate::mnemonic;
use crate::types::SecureSeed;

/// BIP39 seed: PBKDF2-HMAC-SHA512 over the phrase, 2048 rounds, salt
/// `"mnemonic" + passphrase`.
pub fn derive_seed(mnemonic: &Mnemonic, passphrase: &str) -> SecureSeed {
    let salt = format!("mnemonic{}", passphrase);
    let mut seed = [0u8; SEED_SIZE];
    pbkdf2_hmac::<Sha512>(
        mnemonic.phrase().as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );
    SecureSeed::new(seed)
}

/// BIP32 root key. The master key is the spending key; no child path is
/// ever derived below it.
pub fn master_key_from_seed(network: Network, seed: &SecureSeed) -> Result<Xpriv, WalletError> {
    Ok(Xpriv::new_master(network, seed.as_bytes())?)
}

pub fn master_secret_bytes(xprv: &Xpriv) -> [u8; 32] {
    xprv.private_key.secret_bytes()
}

pub fn master_public_key(network: Network, xprv: &Xpriv) -> PublicKey {
    let secp = Secp256k1::new();
    let private_key = PrivateKey::new(xprv.private_key, network);
    PublicKey::from_private_key(&secp, &private_key)
}

pub fn encode_address(public_key: PublicKey, network: Network) -> String {
    Address::p2pkh(public_key, network).to_string()
}

/// Full pipeline from a stored phrase to its address. Key material is never
/// cached; every caller re-derives from the phrase.
pub fn derive_address(
    network: Network,
    phrase: &str,
    passphrase: &str,
) -> Result<String, WalletError> {
    let parsed = mnemonic::parse(phrase)?;
    let seed = derive_seed(&parsed, passphrase);
    let xprv = master_key_from_seed(network, &seed)?;
    let public_key = master_public_key(network, &xprv);
    Ok(encode_address(public_key, network))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const PHRASE_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    // published BIP39/BIP32 vectors for PHRASE_12, empty passphrase
    const SEED_12: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";
    const MASTER_12: &str = "1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67";
    const PUBKEY_12: &str = "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494";
    const ADDR_12_TESTNET: &str = "mr5726L6a5iGCWTFwP465s2ju12t19sE8P";
    const ADDR_12_MAINNET: &str = "1BZ9j3F7m4H1RPyeDp5iFwpR31SB6zrs19";

    const ADDR_24_TESTNET: &str = "moCEkYdEQ3DjzqkDWdXErayP57jRLad2tb";

    fn parsed(phrase: &str) -> Mnemonic {
        mnemonic::parse(phrase).unwrap()
    }

    #[test]
    fn seed_matches_published_vector() {
        let seed = derive_seed(&parsed(PHRASE_12), "");
        assert_eq!(hex::encode(seed.as_bytes()), SEED_12);
    }

    #[test]
    fn seed_honors_passphrase() {
        let phrase = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        let seed = derive_seed(&parsed(phrase), "TREZOR");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"
        );
        assert_ne!(seed.as_bytes(), derive_seed(&parsed(phrase), "").as_bytes());
    }

    #[test]
    fn master_key_matches_published_vector() {
        let seed = derive_seed(&parsed(PHRASE_12), "");
        let xprv = master_key_from_seed(Network::Testnet, &seed).unwrap();
        assert_eq!(hex::encode(master_secret_bytes(&xprv)), MASTER_12);
    }

    #[test]
    fn public_key_is_compressed() {
        let seed = derive_seed(&parsed(PHRASE_12), "");
        let xprv = master_key_from_seed(Network::Testnet, &seed).unwrap();
        let public_key = master_public_key(Network::Testnet, &xprv);
        assert_eq!(public_key.to_string(), PUBKEY_12);
        assert_eq!(public_key.to_bytes().len(), 33);
    }

    #[test]
    fn address_pipeline_matches_vectors() {
        assert_eq!(
            derive_address(Network::Testnet, PHRASE_12, "").unwrap(),
            ADDR_12_TESTNET
        );
        assert_eq!(
            derive_address(Network::Testnet, PHRASE_24, "").unwrap(),
            ADDR_24_TESTNET
        );
    }

    #[test]
    fn network_selects_version_byte() {
        assert_eq!(
            derive_address(Network::Bitcoin, PHRASE_12, "").unwrap(),
            ADDR_12_MAINNET
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = derive_address(Network::Testnet, PHRASE_12, "").unwrap();
        let second = derive_address(Network::Testnet, PHRASE_12, "").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_phrase_does_not_derive() {
        let err = derive_address(
            Network::Testnet,
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo",
            "",
        );
        assert!(matches!(err, Err(WalletError::InvalidMnemonic)));
    }
}
