use clap::Subcommand;

use crate::constants::NETWORK;
use crate::ops;
use crate::store::WalletStore;
use crate::utils::store_file;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new wallet with a fresh mnemonic phrase
    Create {
        #[arg(short, long, help = "Name for the new wallet")]
        name: String,
        #[arg(short, long, default_value = "12", help = "Number of mnemonic words (12 or 24)")]
        words: u32,
    },
    /// Import an existing wallet from a BIP39 mnemonic phrase
    Import {
        #[arg(short, long, help = "BIP39 mnemonic phrase")]
        mnemonic: String,
        #[arg(short, long, help = "Name for the imported wallet")]
        name: String,
    },
    /// List all stored wallets
    List,
    /// Show the confirmed balance of a wallet
    Balance {
        #[arg(short, long, help = "Wallet name")]
        name: String,
    },
    /// Show the transaction history of a wallet
    Transactions {
        #[arg(short, long, help = "Wallet name")]
        name: String,
    },
    /// Re-derive the receiving address of a wallet
    Address {
        #[arg(short, long, help = "Wallet name")]
        name: String,
    },
}

pub fn execute_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WalletStore::open(store_file()?, NETWORK)?;
    match command {
        Commands::Create { name, words } => ops::create_wallet(&mut store, &name, words),
        Commands::Import { mnemonic, name } => ops::import_wallet(&mut store, &mnemonic, &name),
        Commands::List => ops::list_wallets(&store),
        Commands::Balance { name } => ops::show_balance(&store, &name),
        Commands::Transactions { name } => ops::show_transactions(&store, &name),
        Commands::Address { name } => ops::generate_address(&store, &name),
    }
}
