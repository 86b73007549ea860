use std::env;

use crate::constants::*;
use crate::derive;
use crate::error::WalletError;
use crate::explorer::{ExplorerClient, ExplorerConfig};
use crate::store::WalletStore;
use crate::types::WalletRecord;
use crate::utils::*;

pub fn create_wallet(
    store: &mut WalletStore,
    name: &str,
    words: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.create(name, words)?;
    println!("\nWallet created successfully.\n");
    println!("Name: {}", record.name);
    println!("Mnemonic: {}", record.mnemonic);
    println!("Address: {}\n", record.address);
    println!("Write down your mnemonic phrase and store it securely offline.");
    println!("It is the only way to recover this wallet.\n");
    Ok(())
}

pub fn import_wallet(
    store: &mut WalletStore,
    phrase: &str,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = store.import(phrase, name)?;
    println!("\nWallet imported successfully.\n");
    println!("Name: {}", record.name);
    println!("Address: {}\n", record.address);
    Ok(())
}

pub fn list_wallets(store: &WalletStore) -> Result<(), Box<dyn std::error::Error>> {
    if store.is_empty() {
        println!("No wallets stored yet. Run `create` or `import` first.");
        return Ok(());
    }
    println!("\nStored wallets ({}):", store.len());
    for record in store.wallets() {
        println!("  {}: {}", record.name, record.address);
    }
    println!();
    Ok(())
}

pub fn show_balance(store: &WalletStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let record = lookup(store, name)?;
    let client = ExplorerClient::new(explorer_config());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let balance = runtime.block_on(client.address_balance(&record.address))?;
    println!(
        "Balance for {}: {} BTC",
        record.address,
        format_btc(balance.balance)
    );
    if balance.unconfirmed_balance != 0 {
        println!("Unconfirmed: {} satoshis", balance.unconfirmed_balance);
    }
    Ok(())
}

pub fn show_transactions(store: &WalletStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let record = lookup(store, name)?;
    let client = ExplorerClient::new(explorer_config());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let transactions = runtime.block_on(client.address_transactions(&record.address))?;
    if transactions.is_empty() {
        println!("No transactions found for {}", record.address);
        return Ok(());
    }
    for tx in &transactions {
        println!("Transaction ID: {}", tx.hash);
        if tx.block_height >= 0 {
            println!("Block Height: {}", tx.block_height);
        } else {
            println!("Block Height: unconfirmed");
        }
        println!("Total Output Value: {} satoshis", tx.total);
        println!("Output Addresses:");
        for output in &tx.outputs {
            for address in &output.addresses {
                println!("- {}", address);
            }
        }
        println!("---");
    }
    Ok(())
}

pub fn generate_address(store: &WalletStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let record = lookup(store, name)?;
    // always re-derive from the stored phrase rather than trusting the
    // cached address field
    let address = derive::derive_address(store.network(), &record.mnemonic, "")?;
    println!("Address for wallet {}: {}", record.name, address);
    Ok(())
}

fn lookup<'a>(store: &'a WalletStore, name: &str) -> Result<&'a WalletRecord, WalletError> {
    store
        .find_by_name(name)
        .ok_or_else(|| WalletError::WalletNotFound(name.to_string()))
}

fn explorer_config() -> ExplorerConfig {
    ExplorerConfig {
        token: env::var(EXPLORER_TOKEN_VAR).ok(),
        ..ExplorerConfig::default()
    }
}
