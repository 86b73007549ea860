//! # bwm
//!
//! Example Bitcoin testnet wallet manager built on BIP39 mnemonic wallets.
//!
//! Each wallet is a named record holding a mnemonic phrase and the testnet
//! P2PKH address derived from it. The address is always re-derivable from
//! the phrase alone: the BIP39 seed (PBKDF2-HMAC-SHA512) feeds the BIP32
//! master key, whose compressed public key is Base58Check-encoded with the
//! testnet version byte. The master key is used directly as the spending
//! key; no account paths are derived.
//!
//! Records are stored as a JSON array in `~/.bwm/wallets.json` and the full
//! list is rewritten (write-temp-then-rename) on every mutation.
//!
//! ## Usage
//!
//! ```bash
//! # Using cargo
//! cargo run -- <command> [options]
//!
//! # Using the compiled binary
//! ./target/release/bwm <command> [options]
//! ```
//!
//! ### Create a Wallet
//!
//! ```bash
//! cargo run -- create -n "savings"
//! cargo run -- create -n "savings" -w 24
//! ```
//!
//! **Flags:**
//! - `-n, --name <name>` (Required): Name for the new wallet
//! - `-w, --words <count>` (Optional): Mnemonic word count (12 or 24, default = `12`)
//!
//! The mnemonic phrase is printed exactly once. Write it down; it is the
//! only way to recover the wallet.
//!
//! ### Import a Wallet
//!
//! ```bash
//! cargo run -- import -m "witch collapse practice feed shame open despair creek road again ice least" -n "recovered"
//! ```
//!
//! **Flags:**
//! - `-m, --mnemonic <phrase>` (Required): Full 12 or 24-word BIP39 phrase
//! - `-n, --name <name>` (Required): Name for the imported wallet
//!
//! ### List Wallets
//!
//! ```bash
//! cargo run -- list
//! ```
//!
//! ### Check a Balance
//!
//! ```bash
//! cargo run -- balance -n "savings"
//! ```
//!
//! ### Show Transaction History
//!
//! ```bash
//! cargo run -- transactions -n "savings"
//! ```
//!
//! `balance` and `transactions` query a BlockCypher-compatible explorer for
//! the Bitcoin test network. Set `BLOCKCYPHER_TOKEN` to pass an API token.
//!
//! ### Re-derive an Address
//!
//! ```bash
//! cargo run -- address -n "savings"
//! ```
//!
//! Runs the full derivation pipeline from the stored mnemonic and prints
//! the resulting address.

pub mod commands;
pub mod constants;
pub mod derive;
pub mod error;
pub mod explorer;
pub mod mnemonic;
pub mod ops;
pub mod store;
pub mod types;
pub mod utils;
