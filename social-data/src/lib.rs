pub mod ad;
pub mod address;
pub mod post;
pub mod profile;

pub use ad::{AdDraft, AdStatus, Advertisement, SocialLinks};
pub use address::Address;
pub use post::{Comment, Post};
pub use profile::{Profile, ProfileUpdate};

/// Storage keys of the persisted collections.
pub const POSTS_KEY: &str = "soapbox-posts";
pub const PROFILES_KEY: &str = "soapbox-profiles";
pub const ADS_KEY: &str = "soapbox-ads";

/// Storage key of the connected session's profile snapshot.
pub const SESSION_KEY: &str = "soapbox-session";

/// The single address granted moderation and admin-delete privileges.
pub const ADMIN_ADDRESS: &str = "9i7m4nS59y2X4EQDegGbCZaSQV5TCp35XLfKWQQMzHrW";

/// Post and ad body limit in characters.
pub const MAX_CONTENT_CHARS: usize = 500;

pub const MIN_DISPLAY_NAME_CHARS: usize = 3;
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;
pub const MAX_BIO_CHARS: usize = 200;

/// Ad lifetime in seconds (30 days).
pub const AD_DURATION: i64 = 30 * 24 * 60 * 60;
