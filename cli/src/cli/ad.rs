use std::path::{Path, PathBuf};

use clap::Parser;

use social_data::{AdDraft, Advertisement, SocialLinks};

use uuid::Uuid;

use crate::{cli::open_store, errors::Error};

#[derive(Debug, Parser)]
pub struct AdCLI {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Create a new advertisement.
    Create(Create),

    /// List advertisements.
    List(List),

    /// Approve a pending ad; admin only.
    Approve(Moderate),

    /// Reject a pending ad; admin only.
    Reject(Moderate),

    /// Delete an ad.
    Delete(Delete),

    /// Count one click on an ad.
    Click(Click),
}

pub async fn ad_cli(dir: PathBuf, cli: AdCLI) {
    let res = match cli.cmd {
        Command::Create(args) => create(&dir, args),
        Command::List(args) => list(&dir, args),
        Command::Approve(args) => approve(&dir, args),
        Command::Reject(args) => reject(&dir, args),
        Command::Delete(args) => delete(&dir, args),
        Command::Click(args) => click(&dir, args),
    };

    if let Err(e) = res {
        eprintln!("❗ Soapbox: {:#?}", e);
    }
}

#[derive(Debug, Parser)]
pub struct Create {
    #[arg(long)]
    title: Option<String>,

    /// The ad text content.
    #[arg(short, long)]
    content: String,

    /// Image URL or data URL.
    #[arg(long)]
    image: Option<String>,

    /// Landing page the ad links to.
    #[arg(long)]
    target_url: Option<String>,

    #[arg(long)]
    twitter: Option<String>,

    #[arg(long)]
    telegram: Option<String>,

    #[arg(long)]
    discord: Option<String>,
}

fn create(dir: &Path, args: Create) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    let draft = AdDraft {
        title: args.title,
        content: args.content,
        image: args.image,
        target_url: args.target_url,
        social_links: SocialLinks {
            twitter: args.twitter,
            telegram: args.telegram,
            discord: args.discord,
        },
    };

    let id = store.create_ad(draft)?;

    match store.ad(id) {
        Some(ad) => println!("✅ Ad Created\nID: {}\nStatus: {}", id, ad.status),
        None => println!("✅ Ad Created\nID: {}", id),
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct List {
    /// Ads awaiting moderation; admin only.
    #[arg(long)]
    pending: bool,

    /// Your own ads regardless of status.
    #[arg(long)]
    mine: bool,
}

fn list(dir: &Path, args: List) -> Result<(), Error> {
    let store = open_store(dir)?;

    let ads: Vec<&Advertisement> = if args.pending {
        store.pending_ads()
    } else if args.mine {
        match store.session() {
            Some(address) => store.user_ads(&address.clone()),
            None => {
                eprintln!("❗ Soapbox: No wallet connected.");
                return Ok(());
            }
        }
    } else {
        store.active_ads()
    };

    if ads.is_empty() {
        println!("No ads.");

        return Ok(());
    }

    for ad in ads {
        if let Some(title) = &ad.title {
            println!("{}", title);
        }

        println!("{}", ad.content);

        if let Some(url) = &ad.target_url {
            println!("Link: {}", url);
        }

        println!(
            "By: {}  Status: {}  Clicks: {}\nID: {}\n",
            ad.author.shorten(),
            ad.status,
            ad.clicks,
            ad.id
        );
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Moderate {
    id: Uuid,
}

fn approve(dir: &Path, args: Moderate) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.approve_ad(args.id)? {
        Some(status) => println!("✅ Ad {}", status),
        None => println!("Nothing to do."),
    }

    Ok(())
}

fn reject(dir: &Path, args: Moderate) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.reject_ad(args.id)? {
        Some(status) => println!("✅ Ad {}", status),
        None => println!("Nothing to do."),
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Delete {
    id: Uuid,
}

fn delete(dir: &Path, args: Delete) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.delete_ad(args.id)? {
        Some(_) => println!("✅ Ad Deleted"),
        None => println!("Nothing to delete."),
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Click {
    id: Uuid,
}

fn click(dir: &Path, args: Click) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.track_ad_click(args.id) {
        Some(clicks) => println!("✅ Click Tracked\nTotal: {}", clicks),
        None => println!("Ad not found."),
    }

    Ok(())
}
