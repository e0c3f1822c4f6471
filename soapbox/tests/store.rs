use local_storage::LocalStorage;

use soapbox::{errors::Error, wallet::StaticWallet, SocialStore};

use social_data::{AdDraft, AdStatus, Address, Advertisement, ProfileUpdate, ADMIN_ADDRESS, ADS_KEY};

fn addr(str: &str) -> Address {
    Address::try_from(str).unwrap()
}

fn admin() -> Address {
    addr(ADMIN_ADDRESS)
}

fn connected(address: &Address) -> SocialStore {
    let mut store = SocialStore::open(LocalStorage::memory(), admin());

    store
        .connect(&StaticWallet::new(address.clone()))
        .unwrap();

    store
}

fn buy_now() -> AdDraft {
    AdDraft {
        content: "Buy now".into(),
        ..Default::default()
    }
}

#[test]
fn like_toggle_is_involution() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let id = store.create_post("hello", None, None).unwrap();

    assert!(store.post(id).unwrap().likes.is_empty());

    assert_eq!(store.toggle_like(id).unwrap(), Some(true));
    assert!(store.post(id).unwrap().likes.contains(&alice));

    assert_eq!(store.toggle_like(id).unwrap(), Some(false));
    assert!(store.post(id).unwrap().likes.is_empty());

    // Unknown post is nothing to do.
    assert_eq!(store.toggle_like(uuid::Uuid::new_v4()).unwrap(), None);
}

#[test]
fn follow_symmetry() {
    let alice = addr("alicewallet01");
    let bob = addr("bobwallet0001");

    let mut store = connected(&alice);

    assert_eq!(store.toggle_follow(&bob).unwrap(), Some(true));

    assert!(store.profile(&alice).following.contains(&bob));
    assert!(store.profile(&bob).followers.contains(&alice));
    assert!(store.is_following(&bob));

    assert_eq!(store.toggle_follow(&bob).unwrap(), Some(false));

    assert!(!store.profile(&alice).following.contains(&bob));
    assert!(!store.profile(&bob).followers.contains(&alice));
    assert!(!store.is_following(&bob));
}

#[test]
fn follow_synthesizes_multibyte_target_profile() {
    let alice = addr("alicewallet01");
    let target = addr("abcéfghij");

    let mut store = connected(&alice);

    assert_eq!(store.toggle_follow(&target).unwrap(), Some(true));

    let profile = store.profile(&target);

    assert_eq!(profile.display_name, "abcé...ghij");
    assert!(profile.followers.contains(&alice));
}

#[test]
fn self_follow_never_changes_state() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    assert_eq!(store.toggle_follow(&alice).unwrap(), None);

    let profile = store.profile(&alice);

    assert!(profile.following.is_empty());
    assert!(profile.followers.is_empty());
}

#[test]
fn empty_post_refused() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    assert!(matches!(
        store.create_post("", None, None),
        Err(Error::EmptyContent)
    ));
    assert!(matches!(
        store.create_post("   \n", None, None),
        Err(Error::EmptyContent)
    ));

    assert!(store.feed_posts().is_empty());

    // Media alone carries a post.
    assert!(store
        .create_post("", Some("https://example.com/cat.png".into()), None)
        .is_ok());
}

#[test]
fn new_post_shape() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let id = store.create_post("hello", None, None).unwrap();

    let feed = store.feed_posts();

    assert_eq!(feed.len(), 1);

    let post = feed[0];

    assert_eq!(post.id, id);
    assert_eq!(post.author, alice);
    assert_eq!(post.content, "hello");
    assert!(post.likes.is_empty());
    assert!(post.comments.is_empty());
}

#[test]
fn oversized_content_refused() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let oversized = "x".repeat(501);

    assert!(matches!(
        store.create_post(&oversized, None, None),
        Err(Error::ContentTooLong)
    ));
    assert!(matches!(
        store.create_ad(AdDraft {
            content: oversized,
            ..Default::default()
        }),
        Err(Error::ContentTooLong)
    ));
}

#[test]
fn mutations_need_a_session() {
    let mut store = SocialStore::open(LocalStorage::memory(), admin());

    assert!(matches!(
        store.create_post("hello", None, None),
        Err(Error::NotConnected)
    ));
    assert!(matches!(
        store.toggle_follow(&addr("bobwallet0001")),
        Err(Error::NotConnected)
    ));
    assert!(matches!(store.create_ad(buy_now()), Err(Error::NotConnected)));
}

#[test]
fn ad_initial_status_by_author() {
    let alice = addr("alicewallet01");

    let mut store = connected(&alice);
    let id = store.create_ad(buy_now()).unwrap();

    assert_eq!(store.ad(id).unwrap().status, AdStatus::Pending);

    let mut store = connected(&admin());
    let id = store.create_ad(buy_now()).unwrap();

    assert_eq!(store.ad(id).unwrap().status, AdStatus::Approved);
}

#[test]
fn active_ads_exclusions() {
    // Seed one approved-but-expired ad behind the store's back.
    let mut storage = LocalStorage::memory();

    let stale = Advertisement::new(addr("alicewallet01"), buy_now(), AdStatus::Approved, 0);

    storage.save(ADS_KEY, &vec![stale]).unwrap();

    let mut store = SocialStore::open(storage, admin());

    assert!(store.active_ads().is_empty());

    store
        .connect(&StaticWallet::new(addr("alicewallet01")))
        .unwrap();

    let pending = store.create_ad(buy_now()).unwrap();

    store.connect(&StaticWallet::new(admin())).unwrap();

    let approved = store.create_ad(buy_now()).unwrap();

    // Fresh admin ads are approved; reject needs a pending one.
    assert_eq!(store.reject_ad(approved).unwrap(), None);
    assert_eq!(store.reject_ad(pending).unwrap(), Some(AdStatus::Rejected));

    // Approved + unexpired only.
    let active = store.active_ads();

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, approved);
}

#[test]
fn moderation_is_admin_only_and_terminal() {
    let alice = addr("alicewallet01");

    let mut store = connected(&alice);

    let id = store.create_ad(buy_now()).unwrap();

    // Author is not the moderator.
    assert_eq!(store.approve_ad(id).unwrap(), None);
    assert_eq!(store.ad(id).unwrap().status, AdStatus::Pending);
    assert!(store.pending_ads().is_empty());

    store.connect(&StaticWallet::new(admin())).unwrap();

    assert_eq!(store.pending_ads().len(), 1);
    assert_eq!(store.approve_ad(id).unwrap(), Some(AdStatus::Approved));

    // No way back out of approved.
    assert_eq!(store.reject_ad(id).unwrap(), None);
    assert_eq!(store.approve_ad(id).unwrap(), None);
    assert_eq!(store.ad(id).unwrap().status, AdStatus::Approved);
}

#[test]
fn pending_approve_delete_scenario() {
    let user = addr("u1wallet00001");

    let mut store = connected(&user);

    let id = store.create_ad(buy_now()).unwrap();

    assert_eq!(store.ad(id).unwrap().status, AdStatus::Pending);
    assert!(store.active_ads().is_empty());

    store.connect(&StaticWallet::new(admin())).unwrap();

    assert_eq!(store.approve_ad(id).unwrap(), Some(AdStatus::Approved));
    assert!(store.active_ads().iter().any(|ad| ad.id == id));

    // Back to the author, who may delete its own ad.
    store.connect(&StaticWallet::new(user.clone())).unwrap();

    assert!(store.delete_ad(id).unwrap().is_some());

    assert!(store.ad(id).is_none());
    assert!(store.active_ads().is_empty());
    assert!(store.user_ads(&user).is_empty());
}

#[test]
fn ad_deletion_authorization() {
    let alice = addr("alicewallet01");
    let bob = addr("bobwallet0001");

    let mut store = connected(&alice);

    let id = store.create_ad(buy_now()).unwrap();

    // A stranger cannot delete it.
    store.connect(&StaticWallet::new(bob)).unwrap();

    assert_eq!(store.delete_ad(id).unwrap().map(|ad| ad.id), None);

    // The admin can.
    store.connect(&StaticWallet::new(admin())).unwrap();

    assert!(store.delete_ad(id).unwrap().is_some());
}

#[test]
fn post_deletion_authorization() {
    let alice = addr("alicewallet01");
    let bob = addr("bobwallet0001");

    let mut store = connected(&alice);

    let id = store.create_post("mine", None, None).unwrap();

    store.connect(&StaticWallet::new(bob.clone())).unwrap();

    assert_eq!(store.delete_post(id).unwrap().map(|post| post.id), None);
    // Admin-delete is refused for non-admin callers.
    assert_eq!(store.delete_any_post(id).unwrap().map(|post| post.id), None);

    store.connect(&StaticWallet::new(admin())).unwrap();

    assert!(store.delete_any_post(id).unwrap().is_some());
    assert!(store.post(id).is_none());
}

#[test]
fn comments_append_in_order() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let id = store.create_post("hello", None, None).unwrap();

    assert!(matches!(
        store.add_comment(id, "  "),
        Err(Error::EmptyContent)
    ));

    let first = store.add_comment(id, "first").unwrap().unwrap();
    let second = store.add_comment(id, "second").unwrap().unwrap();

    let comments = &store.post(id).unwrap().comments;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, first);
    assert_eq!(comments[1].id, second);

    assert_eq!(store.add_comment(uuid::Uuid::new_v4(), "lost").unwrap(), None);
}

#[test]
fn click_tally_is_monotonic_and_anonymous() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let id = store.create_ad(buy_now()).unwrap();

    // The author may inflate its own tally.
    assert_eq!(store.track_ad_click(id), Some(1));

    // No session needed at all.
    store.disconnect(&StaticWallet::new(alice));

    assert_eq!(store.track_ad_click(id), Some(2));
    assert_eq!(store.track_ad_click(id), Some(3));

    assert_eq!(store.track_ad_click(uuid::Uuid::new_v4()), None);
}

#[test]
fn profile_synthesis_and_update() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let profile = store.profile(&alice);

    assert_eq!(profile.display_name, alice.shorten());
    assert_eq!(profile.updated_at, None);

    assert!(matches!(
        store.update_profile(ProfileUpdate {
            display_name: Some("ab".into()),
            ..Default::default()
        }),
        Err(Error::DisplayName)
    ));
    assert!(matches!(
        store.update_profile(ProfileUpdate {
            bio: Some("x".repeat(201)),
            ..Default::default()
        }),
        Err(Error::Bio)
    ));

    let profile = store
        .update_profile(ProfileUpdate {
            display_name: Some("Alice".into()),
            bio: Some("gm".into()),
            custom_avatar: None,
        })
        .unwrap();

    assert_eq!(profile.display_name, "Alice");
    assert_eq!(profile.bio, "gm");
    assert!(profile.updated_at.is_some());

    // Merge leaves untouched fields alone.
    let profile = store
        .update_profile(ProfileUpdate {
            custom_avatar: Some("data:image/png;base64,AQID".into()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(profile.display_name, "Alice");
    assert_eq!(profile.bio, "gm");
}

#[test]
fn feed_order_is_insertion_recency() {
    let alice = addr("alicewallet01");
    let mut store = connected(&alice);

    let first = store.create_post("first", None, None).unwrap();
    let second = store.create_post("second", None, None).unwrap();
    let third = store
        .create_post("third", None, Some("https://example.com/clip.mp4".into()))
        .unwrap();

    // Same-second posts keep most-recent-first insertion order.
    let feed: Vec<_> = store.feed_posts().iter().map(|post| post.id).collect();

    assert_eq!(feed, vec![third, second, first]);

    let videos: Vec<_> = store.video_posts().iter().map(|post| post.id).collect();

    assert_eq!(videos, vec![third]);

    let user: Vec<_> = store.user_posts(&alice).iter().map(|post| post.id).collect();

    assert_eq!(user, vec![third, second, first]);

    assert!(store.admin_posts().is_empty());
}

#[test]
fn full_state_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let alice = addr("alicewallet01");
    let bob = addr("bobwallet0001");

    let (post_id, ad_id) = {
        let storage = LocalStorage::open(dir.path()).unwrap();
        let mut store = SocialStore::open(storage, admin());

        store.connect(&StaticWallet::new(alice.clone())).unwrap();

        let post_id = store.create_post("durable", None, None).unwrap();

        store.toggle_like(post_id).unwrap();
        store.add_comment(post_id, "still here").unwrap();
        store.toggle_follow(&bob).unwrap();

        let ad_id = store.create_ad(buy_now()).unwrap();

        (post_id, ad_id)
    };

    let storage = LocalStorage::open(dir.path()).unwrap();
    let store = SocialStore::open(storage, admin());

    // Session snapshot short-circuits re-authentication.
    assert_eq!(store.session(), Some(&alice));

    let post = store.post(post_id).unwrap();

    assert_eq!(post.content, "durable");
    assert!(post.likes.contains(&alice));
    assert_eq!(post.comments[0].content, "still here");

    assert!(store.profile(&alice).following.contains(&bob));
    assert!(store.profile(&bob).followers.contains(&alice));

    let ad = store.ad(ad_id).unwrap();

    assert_eq!(ad.content, "Buy now");
    assert_eq!(ad.status, AdStatus::Pending);
}

#[test]
fn disconnect_forgets_the_session() {
    let dir = tempfile::tempdir().unwrap();

    let alice = addr("alicewallet01");

    {
        let storage = LocalStorage::open(dir.path()).unwrap();
        let mut store = SocialStore::open(storage, admin());

        store.connect(&StaticWallet::new(alice.clone())).unwrap();
        store.disconnect(&StaticWallet::new(alice));
    }

    let storage = LocalStorage::open(dir.path()).unwrap();
    let store = SocialStore::open(storage, admin());

    assert_eq!(store.session(), None);
    assert_eq!(store.current_profile(), None);
}

#[test]
fn quota_failure_degrades_durability_not_state() {
    let dir = tempfile::tempdir().unwrap();

    let alice = addr("alicewallet01");

    {
        let storage = LocalStorage::open_with_quota(dir.path(), 64).unwrap();
        let mut store = SocialStore::open(storage, admin());

        store.connect(&StaticWallet::new(alice)).unwrap();

        // Too big to persist, kept in memory regardless.
        let id = store
            .create_post(&"x".repeat(400), None, None)
            .unwrap();

        assert!(store.post(id).is_some());
        assert_eq!(store.feed_posts().len(), 1);
    }

    let storage = LocalStorage::open_with_quota(dir.path(), 64).unwrap();
    let store = SocialStore::open(storage, admin());

    // The write was swallowed; the post did not survive the reload.
    assert!(store.feed_posts().is_empty());
}
