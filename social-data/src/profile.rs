use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Social identity of one wallet address.
///
/// Synthesized with defaults on first read, persisted only once an
/// explicit update or a follow touches it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Profile {
    /// Wallet address, also the storage key.
    pub address: Address,

    /// Public chosen name, defaults to the shortened address.
    pub display_name: String,

    pub bio: String,

    /// URL or data URL of a user supplied avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_avatar: Option<String>,

    /// Addresses following this profile.
    pub followers: HashSet<Address>,

    /// Addresses this profile follows.
    pub following: HashSet<Address>,

    /// Timestamp at synthesis in Unix time.
    pub created_at: i64,

    /// Timestamp of the last explicit update in Unix time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Profile {
    /// Default profile for an address never seen before.
    pub fn synthesize(address: Address, now: i64) -> Self {
        Self {
            display_name: address.shorten(),
            address,
            bio: String::new(),
            custom_avatar: None,
            followers: HashSet::new(),
            following: HashSet::new(),
            created_at: now,
            updated_at: None,
        }
    }
}

/// Fields of one's own profile that an update may merge in.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub custom_avatar: Option<String>,
}
