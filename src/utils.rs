use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::WalletError;

pub fn wallet_dir() -> Result<PathBuf, WalletError> {
    let home = dirs::home_dir().ok_or(WalletError::HomeDir)?;
    let wallet_dir = home.join(WALLET_DIR);
    if !wallet_dir.exists() {
        fs::create_dir_all(&wallet_dir).map_err(WalletError::StorageWrite)?;
        set_secure_permissions(&wallet_dir).map_err(WalletError::StorageWrite)?;
    }
    Ok(wallet_dir)
}

pub fn store_file() -> Result<PathBuf, WalletError> {
    Ok(wallet_dir()?.join(WALLET_FILE))
}

pub fn set_secure_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    #[cfg(windows)]
    {
        let _ = path;
        eprintln!("File permissions not set on Windows. Ensure this directory is protected.");
    }
    Ok(())
}

pub fn set_secure_file_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(windows)]
    {
        let _ = path;
        eprintln!("File permissions not set on Windows. Ensure this file is protected.");
    }
    Ok(())
}

pub fn format_btc(sats: u64) -> String {
    format!("{}.{:08}", sats / SATS_PER_BTC, sats % SATS_PER_BTC)
}
