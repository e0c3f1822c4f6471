use std::collections::HashMap;

use chrono::Utc;

use local_storage::LocalStorage;

use social_data::{
    AdDraft, AdStatus, Address, Advertisement, Comment, Post, Profile, ProfileUpdate, ADS_KEY,
    MAX_BIO_CHARS, MAX_CONTENT_CHARS, MAX_DISPLAY_NAME_CHARS, MIN_DISPLAY_NAME_CHARS, POSTS_KEY,
    PROFILES_KEY, SESSION_KEY,
};

use url::Url;

use uuid::Uuid;

use crate::{errors::Error, wallet::Wallet};

fn now() -> i64 {
    Utc::now().timestamp()
}

/// Authoritative social state; posts, profiles and ads.
///
/// Constructed by the composition root with injected storage and the
/// admin address. Every mutation rewrites its owning collection in
/// full before returning; a failed write is logged and swallowed,
/// leaving in-memory state authoritative for the session.
///
/// Operations that find nothing to do, including authorization
/// refusals, answer `Ok(None)`. Real failures are `Err`.
pub struct SocialStore {
    storage: LocalStorage,
    admin: Address,
    session: Option<Address>,
    posts: Vec<Post>,
    profiles: HashMap<Address, Profile>,
    ads: Vec<Advertisement>,
}

impl SocialStore {
    /// Load all collections and the session snapshot from storage.
    pub fn open(storage: LocalStorage, admin: Address) -> Self {
        let posts = storage.load(POSTS_KEY).unwrap_or_default();
        let profiles = storage.load(PROFILES_KEY).unwrap_or_default();
        let ads = storage.load(ADS_KEY).unwrap_or_default();

        let session = storage
            .load::<Profile>(SESSION_KEY)
            .map(|profile| profile.address);

        Self {
            storage,
            admin,
            session,
            posts,
            profiles,
            ads,
        }
    }

    pub fn session(&self) -> Option<&Address> {
        self.session.as_ref()
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    /// The entire authorization model.
    pub fn is_admin(&self, address: &Address) -> bool {
        *address == self.admin
    }

    fn admin_session(&self) -> bool {
        match &self.session {
            Some(address) => self.is_admin(address),
            None => false,
        }
    }

    fn caller(&self) -> Result<Address, Error> {
        self.session.clone().ok_or(Error::NotConnected)
    }

    fn persist_posts(&mut self) {
        if let Err(e) = self.storage.save(POSTS_KEY, &self.posts) {
            eprintln!("❗ Storage: posts not persisted, in-memory state kept: {}", e);
        }
    }

    fn persist_profiles(&mut self) {
        if let Err(e) = self.storage.save(PROFILES_KEY, &self.profiles) {
            eprintln!(
                "❗ Storage: profiles not persisted, in-memory state kept: {}",
                e
            );
        }
    }

    fn persist_ads(&mut self) {
        if let Err(e) = self.storage.save(ADS_KEY, &self.ads) {
            eprintln!("❗ Storage: ads not persisted, in-memory state kept: {}", e);
        }
    }

    fn persist_session(&mut self) {
        let snapshot = match &self.session {
            Some(address) => self.profile(address),
            None => return,
        };

        if let Err(e) = self.storage.save(SESSION_KEY, &snapshot) {
            eprintln!("❗ Storage: session not persisted: {}", e);
        }
    }

    /// Connect the wallet and restore or synthesize its profile.
    pub fn connect(&mut self, wallet: &impl Wallet) -> Result<Profile, Error> {
        let address = wallet.connect()?;

        let profile = self.profile(&address);

        self.session = Some(address);
        self.persist_session();

        Ok(profile)
    }

    /// Disconnect best-effort and forget the session snapshot.
    pub fn disconnect(&mut self, wallet: &impl Wallet) {
        wallet.disconnect();

        self.session = None;

        if let Err(e) = self.storage.remove(SESSION_KEY) {
            eprintln!("❗ Storage: session not removed: {}", e);
        }
    }

    /// Was this address ever explicitly written?
    pub fn has_profile(&self, address: &Address) -> bool {
        self.profiles.contains_key(address)
    }

    /// Stored profile, or a synthesized default that is NOT persisted.
    pub fn profile(&self, address: &Address) -> Profile {
        match self.profiles.get(address) {
            Some(profile) => profile.clone(),
            None => Profile::synthesize(address.clone(), now()),
        }
    }

    pub fn current_profile(&self) -> Option<Profile> {
        self.session.as_ref().map(|address| self.profile(address))
    }

    /// Merge fields into the caller's own profile.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<Profile, Error> {
        let caller = self.caller()?;

        let display_name = match update.display_name {
            Some(name) => {
                let name = name.trim().to_owned();
                let count = name.chars().count();

                if !(MIN_DISPLAY_NAME_CHARS..=MAX_DISPLAY_NAME_CHARS).contains(&count) {
                    return Err(Error::DisplayName);
                }

                Some(name)
            }
            None => None,
        };

        if let Some(bio) = &update.bio {
            if bio.chars().count() > MAX_BIO_CHARS {
                return Err(Error::Bio);
            }
        }

        let timestamp = now();

        let profile = self
            .profiles
            .entry(caller.clone())
            .or_insert_with(|| Profile::synthesize(caller, timestamp));

        if let Some(name) = display_name {
            profile.display_name = name;
        }

        if let Some(bio) = update.bio {
            profile.bio = bio;
        }

        if let Some(avatar) = update.custom_avatar {
            profile.custom_avatar = Some(avatar);
        }

        profile.updated_at = Some(timestamp);

        let profile = profile.clone();

        self.persist_profiles();
        self.persist_session();

        Ok(profile)
    }

    /// Create a post and prepend it to the feed.
    ///
    /// Needs text content, an image or a video; anything less is refused.
    pub fn create_post(
        &mut self,
        content: &str,
        image: Option<String>,
        video: Option<String>,
    ) -> Result<Uuid, Error> {
        let author = self.caller()?;

        let content = content.trim();

        if content.is_empty() && image.is_none() && video.is_none() {
            return Err(Error::EmptyContent);
        }

        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(Error::ContentTooLong);
        }

        let post = Post::new(author, content.to_owned(), image, video, now());
        let id = post.id;

        self.posts.insert(0, post);
        self.persist_posts();

        Ok(id)
    }

    /// Remove the caller's own post.
    pub fn delete_post(&mut self, post_id: Uuid) -> Result<Option<Post>, Error> {
        let caller = self.caller()?;

        let index = self
            .posts
            .iter()
            .position(|post| post.id == post_id && post.author == caller);

        match index {
            Some(index) => {
                let post = self.posts.remove(index);

                self.persist_posts();

                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    /// Remove any post regardless of author; admin only.
    pub fn delete_any_post(&mut self, post_id: Uuid) -> Result<Option<Post>, Error> {
        let caller = self.caller()?;

        if !self.is_admin(&caller) {
            return Ok(None);
        }

        match self.posts.iter().position(|post| post.id == post_id) {
            Some(index) => {
                let post = self.posts.remove(index);

                self.persist_posts();

                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    /// Flip the caller's like on this post. Its own inverse.
    pub fn toggle_like(&mut self, post_id: Uuid) -> Result<Option<bool>, Error> {
        let caller = self.caller()?;

        let post = match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => post,
            None => return Ok(None),
        };

        let liked = post.likes.insert(caller.clone());

        if !liked {
            post.likes.remove(&caller);
        }

        self.persist_posts();

        Ok(Some(liked))
    }

    /// Append a comment to this post.
    pub fn add_comment(&mut self, post_id: Uuid, text: &str) -> Result<Option<Uuid>, Error> {
        let author = self.caller()?;

        let text = text.trim();

        if text.is_empty() {
            return Err(Error::EmptyContent);
        }

        let post = match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => post,
            None => return Ok(None),
        };

        let comment = Comment {
            id: Uuid::new_v4(),
            author,
            content: text.to_owned(),
            created_at: now(),
        };

        let id = comment.id;

        post.comments.push(comment);
        self.persist_posts();

        Ok(Some(id))
    }

    /// Flip the symmetric follow relation between caller and target.
    ///
    /// Both sides change before the single persistence write, or
    /// neither does. Self-follow is a silent no-op.
    pub fn toggle_follow(&mut self, target: &Address) -> Result<Option<bool>, Error> {
        let caller = self.caller()?;

        if *target == caller {
            return Ok(None);
        }

        let timestamp = now();

        let caller_profile = self
            .profiles
            .entry(caller.clone())
            .or_insert_with(|| Profile::synthesize(caller.clone(), timestamp));

        let following = caller_profile.following.insert(target.clone());

        if !following {
            caller_profile.following.remove(target);
        }

        let target_profile = self
            .profiles
            .entry(target.clone())
            .or_insert_with(|| Profile::synthesize(target.clone(), timestamp));

        if following {
            target_profile.followers.insert(caller);
        } else {
            target_profile.followers.remove(&caller);
        }

        self.persist_profiles();

        Ok(Some(following))
    }

    /// Create an ad; auto-approved for the admin, pending otherwise.
    pub fn create_ad(&mut self, draft: AdDraft) -> Result<Uuid, Error> {
        let author = self.caller()?;

        let AdDraft {
            title,
            content,
            image,
            target_url,
            social_links,
        } = draft;

        let content = content.trim().to_owned();

        if content.is_empty() {
            return Err(Error::EmptyContent);
        }

        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(Error::ContentTooLong);
        }

        if let Some(url) = &target_url {
            Url::parse(url)?;
        }

        let title = title.and_then(|title| {
            let title = title.trim();

            if title.is_empty() {
                None
            } else {
                Some(title.to_owned())
            }
        });

        let status = if self.is_admin(&author) {
            AdStatus::Approved
        } else {
            AdStatus::Pending
        };

        let draft = AdDraft {
            title,
            content,
            image,
            target_url,
            social_links,
        };

        let ad = Advertisement::new(author, draft, status, now());
        let id = ad.id;

        self.ads.insert(0, ad);
        self.persist_ads();

        Ok(id)
    }

    /// Approve a pending ad; admin only.
    pub fn approve_ad(&mut self, ad_id: Uuid) -> Result<Option<AdStatus>, Error> {
        self.moderate_ad(ad_id, AdStatus::Approved)
    }

    /// Reject a pending ad; admin only.
    pub fn reject_ad(&mut self, ad_id: Uuid) -> Result<Option<AdStatus>, Error> {
        self.moderate_ad(ad_id, AdStatus::Rejected)
    }

    fn moderate_ad(&mut self, ad_id: Uuid, status: AdStatus) -> Result<Option<AdStatus>, Error> {
        let caller = self.caller()?;

        if !self.is_admin(&caller) {
            return Ok(None);
        }

        let ad = match self.ads.iter_mut().find(|ad| ad.id == ad_id) {
            Some(ad) => ad,
            None => return Ok(None),
        };

        // Moderation is terminal, only pending ads transition.
        if ad.status != AdStatus::Pending {
            return Ok(None);
        }

        ad.status = status;

        self.persist_ads();

        Ok(Some(status))
    }

    /// Remove an ad; the admin any, an author only its own.
    pub fn delete_ad(&mut self, ad_id: Uuid) -> Result<Option<Advertisement>, Error> {
        let caller = self.caller()?;

        let admin = self.is_admin(&caller);

        let index = self
            .ads
            .iter()
            .position(|ad| ad.id == ad_id && (admin || ad.author == caller));

        match index {
            Some(index) => {
                let ad = self.ads.remove(index);

                self.persist_ads();

                Ok(Some(ad))
            }
            None => Ok(None),
        }
    }

    /// Bump the click tally. Callable by anyone, no session needed.
    pub fn track_ad_click(&mut self, ad_id: Uuid) -> Option<u64> {
        let ad = self.ads.iter_mut().find(|ad| ad.id == ad_id)?;

        ad.clicks += 1;

        let clicks = ad.clicks;

        self.persist_ads();

        Some(clicks)
    }

    pub fn post(&self, post_id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    pub fn ad(&self, ad_id: Uuid) -> Option<&Advertisement> {
        self.ads.iter().find(|ad| ad.id == ad_id)
    }

    /// All posts, most recent first.
    pub fn feed_posts(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();

        // Stable sort; same-timestamp posts keep feed order.
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        posts
    }

    /// One author's posts in existing feed order.
    pub fn user_posts(&self, address: &Address) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.author == *address)
            .collect()
    }

    /// Posts carrying a video, most recent first.
    pub fn video_posts(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.video.is_some())
            .collect();

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        posts
    }

    /// The admin's posts, most recent first.
    pub fn admin_posts(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.author == self.admin)
            .collect();

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        posts
    }

    /// Approved, unexpired ads, most recent first.
    pub fn active_ads(&self) -> Vec<&Advertisement> {
        let timestamp = now();

        let mut ads: Vec<&Advertisement> = self
            .ads
            .iter()
            .filter(|ad| ad.is_active(timestamp))
            .collect();

        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        ads
    }

    /// Ads awaiting moderation; empty for anyone but the admin.
    pub fn pending_ads(&self) -> Vec<&Advertisement> {
        if !self.admin_session() {
            return Vec::new();
        }

        let mut ads: Vec<&Advertisement> = self
            .ads
            .iter()
            .filter(|ad| ad.status == AdStatus::Pending)
            .collect();

        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        ads
    }

    /// One author's ads regardless of status, most recent first.
    pub fn user_ads(&self, address: &Address) -> Vec<&Advertisement> {
        let mut ads: Vec<&Advertisement> = self
            .ads
            .iter()
            .filter(|ad| ad.author == *address)
            .collect();

        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        ads
    }

    /// Does the session follow this address?
    pub fn is_following(&self, target: &Address) -> bool {
        let caller = match &self.session {
            Some(address) => address,
            None => return false,
        };

        match self.profiles.get(caller) {
            Some(profile) => profile.following.contains(target),
            None => false,
        }
    }
}
