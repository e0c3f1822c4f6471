use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};

use clap::Parser;

use social_data::{Address, Post};

use soapbox::SocialStore;

use crate::{cli::open_store, errors::Error};

#[derive(Debug, Parser)]
pub struct Feed {
    /// Only this author's posts.
    #[arg(long)]
    user: Option<Address>,

    /// Only posts carrying a video.
    #[arg(long)]
    videos: bool,

    /// Only the admin's posts.
    #[arg(long)]
    admin: bool,
}

pub async fn feed_cli(dir: PathBuf, args: Feed) {
    if let Err(e) = feed(&dir, args) {
        eprintln!("❗ Soapbox: {:#?}", e);
    }
}

fn feed(dir: &Path, args: Feed) -> Result<(), Error> {
    let store = open_store(dir)?;

    let posts = if let Some(user) = &args.user {
        store.user_posts(user)
    } else if args.videos {
        store.video_posts()
    } else if args.admin {
        store.admin_posts()
    } else {
        store.feed_posts()
    };

    if posts.is_empty() {
        println!("Nothing posted yet.");

        return Ok(());
    }

    for post in posts {
        print_post(&store, post);
    }

    Ok(())
}

fn print_post(store: &SocialStore, post: &Post) {
    let author = store.profile(&post.author);

    let timestamp = match Utc.timestamp_opt(post.created_at, 0).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => post.created_at.to_string(),
    };

    println!("{} ({}) {}", author.display_name, post.author.shorten(), timestamp);

    if !post.content.is_empty() {
        println!("{}", post.content);
    }

    if let Some(image) = &post.image {
        println!("Image: {}", truncate(image));
    }

    if let Some(video) = &post.video {
        println!("Video: {}", truncate(video));
    }

    println!(
        "Likes: {}  Comments: {}\nID: {}\n",
        post.likes.len(),
        post.comments.len(),
        post.id
    );
}

/// Data URLs are megabytes of base64, keep the terminal readable.
fn truncate(media: &str) -> &str {
    match media.char_indices().nth(64) {
        Some((index, _)) => &media[..index],
        None => media,
    }
}
