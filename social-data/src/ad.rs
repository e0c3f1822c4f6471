use serde::{Deserialize, Serialize};

use strum::{Display, EnumString};

use uuid::Uuid;

use crate::{address::Address, AD_DURATION};

/// Moderation state of an advertisement.
///
/// Approved and rejected are terminal; there is no path back to pending.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// External links shown on an ad card.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

/// Paid placement with a 30 day lifetime.
///
/// Expiry is computed at read time; an approved ad ages out of
/// visibility without a stored state change.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Advertisement {
    pub id: Uuid,

    pub author: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,

    #[serde(default)]
    pub social_links: SocialLinks,

    pub status: AdStatus,

    /// Timestamp at the time of creation in Unix time.
    pub created_at: i64,

    /// Timestamp past which the ad is no longer served, in Unix time.
    pub expires_at: i64,

    /// Monotonically non-decreasing click tally.
    pub clicks: u64,
}

impl Advertisement {
    pub fn new(author: Address, draft: AdDraft, status: AdStatus, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title: draft.title,
            content: draft.content,
            image: draft.image,
            target_url: draft.target_url,
            social_links: draft.social_links,
            status,
            created_at: now,
            expires_at: now + AD_DURATION,
            clicks: 0,
        }
    }

    /// Visible to ordinary feed consumers?
    pub fn is_active(&self, now: i64) -> bool {
        self.status == AdStatus::Approved && self.expires_at > now
    }
}

/// User supplied ad fields before validation and pricing.
#[derive(Debug, Default, Clone)]
pub struct AdDraft {
    pub title: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub target_url: Option<String>,
    pub social_links: SocialLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        assert_eq!(
            serde_json::to_string(&AdStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(AdStatus::Approved.to_string(), "approved");
        assert_eq!("rejected".parse::<AdStatus>().unwrap(), AdStatus::Rejected);
    }

    #[test]
    fn visibility() {
        let author = Address::try_from("wallet01").unwrap();

        let mut ad = Advertisement::new(
            author,
            AdDraft {
                content: "Buy now".into(),
                ..Default::default()
            },
            AdStatus::Approved,
            1000,
        );

        assert_eq!(ad.expires_at, 1000 + AD_DURATION);
        assert!(ad.is_active(1000));

        // Expired even though still approved.
        assert!(!ad.is_active(ad.expires_at));

        ad.status = AdStatus::Pending;
        assert!(!ad.is_active(1000));

        ad.status = AdStatus::Rejected;
        assert!(!ad.is_active(1000));
    }
}
