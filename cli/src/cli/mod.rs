pub mod ad;
pub mod feed;
pub mod post;
pub mod profile;
pub mod session;

use std::path::Path;

use local_storage::LocalStorage;

use soapbox::{wallet::KeystoreWallet, SocialStore};

use social_data::{Address, ADMIN_ADDRESS};

use crate::errors::Error;

pub fn open_store(dir: &Path) -> Result<SocialStore, Error> {
    let storage = LocalStorage::open(dir)?;

    let admin = Address::try_from(ADMIN_ADDRESS)?;

    Ok(SocialStore::open(storage, admin))
}

pub fn keystore_wallet(dir: &Path) -> KeystoreWallet {
    KeystoreWallet::new(dir.join("wallet"))
}
