use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use social_data::Address;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet: Not installed")]
    NotInstalled,

    #[error("Wallet: Connection rejected by user")]
    UserRejected,

    #[error("Address: {0}")]
    Address(#[from] social_data::address::AddressError),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),
}

/// External wallet capability.
///
/// Connecting yields the address the wallet asserts; no ownership
/// verification happens beyond that assertion.
pub trait Wallet {
    fn connect(&self) -> Result<Address, WalletError>;

    /// Best-effort, failures are ignored.
    fn disconnect(&self);
}

/// Wallet backed by a single-line address file.
///
/// Connecting prompts on the terminal for approval, the way a browser
/// extension pops its consent dialog.
pub struct KeystoreWallet {
    path: PathBuf,
}

impl KeystoreWallet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Wallet for KeystoreWallet {
    fn connect(&self) -> Result<Address, WalletError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(WalletError::NotInstalled)
            }
            Err(e) => return Err(e.into()),
        };

        let address = Address::try_from(content)?;

        print!("Connect wallet {}? [y/N] ", address.shorten());
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;

        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            return Err(WalletError::UserRejected);
        }

        Ok(address)
    }

    fn disconnect(&self) {}
}

/// Deterministic wallet for tests and scripting.
#[derive(Clone)]
pub struct StaticWallet {
    pub address: Address,
}

impl StaticWallet {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

impl Wallet for StaticWallet {
    fn connect(&self) -> Result<Address, WalletError> {
        Ok(self.address.clone())
    }

    fn disconnect(&self) {}
}
