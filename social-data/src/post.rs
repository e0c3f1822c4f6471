use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::address::Address;

/// One feed entry.
///
/// Author and timestamp never change once created.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Post {
    pub id: Uuid,

    pub author: Address,

    pub content: String,

    /// URL or data URL of an attached image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// URL or data URL of an attached video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    /// Addresses that liked this post, each at most once.
    pub likes: HashSet<Address>,

    /// Append-only, in publication order.
    pub comments: Vec<Comment>,

    /// Timestamp at the time of publication in Unix time.
    pub created_at: i64,
}

impl Post {
    pub fn new(
        author: Address,
        content: String,
        image: Option<String>,
        video: Option<String>,
        now: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            content,
            image,
            video,
            likes: HashSet::new(),
            comments: Vec::new(),
            created_at: now,
        }
    }
}

/// Comment metadata and text.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Comment {
    pub id: Uuid,

    pub author: Address,

    pub content: String,

    /// Timestamp at the time of publication in Unix time.
    pub created_at: i64,
}
