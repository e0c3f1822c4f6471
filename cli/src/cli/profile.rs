use std::path::{Path, PathBuf};

use clap::Parser;

use soapbox::utils::to_data_url;

use social_data::{Address, Profile, ProfileUpdate};

use crate::{cli::open_store, errors::Error};

#[derive(Debug, Parser)]
pub struct ProfileCLI {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Show a profile.
    Show(Show),

    /// Update your own profile.
    Update(Update),

    /// Follow or unfollow an address.
    Follow(Follow),
}

pub async fn profile_cli(dir: PathBuf, cli: ProfileCLI) {
    let res = match cli.cmd {
        Command::Show(args) => show(&dir, args),
        Command::Update(args) => update(&dir, args),
        Command::Follow(args) => follow(&dir, args),
    };

    if let Err(e) = res {
        eprintln!("❗ Soapbox: {:#?}", e);
    }
}

#[derive(Debug, Parser)]
pub struct Show {
    /// Address to inspect, defaults to the connected session.
    address: Option<Address>,
}

fn show(dir: &Path, args: Show) -> Result<(), Error> {
    let store = open_store(dir)?;

    let profile = match args.address {
        Some(address) => store.profile(&address),
        None => match store.current_profile() {
            Some(profile) => profile,
            None => {
                eprintln!("❗ Soapbox: No wallet connected and no address given.");
                return Ok(());
            }
        },
    };

    let Profile {
        address,
        display_name,
        bio,
        custom_avatar,
        followers,
        following,
        updated_at,
        ..
    } = profile;

    println!("{} ({})", display_name, address.shorten());

    if !bio.is_empty() {
        println!("{}", bio);
    }

    match custom_avatar {
        Some(_) => println!("Avatar: custom"),
        None => println!("Avatar: {}", address.avatar_color()),
    }

    println!("Followers: {}  Following: {}", followers.len(), following.len());

    if updated_at.is_none() {
        println!("(profile not saved yet)");
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Update {
    /// Public display name.
    #[arg(long)]
    display_name: Option<String>,

    #[arg(long)]
    bio: Option<String>,

    /// Path to an avatar image, embedded as a data URL.
    #[arg(long)]
    avatar: Option<PathBuf>,
}

fn update(dir: &Path, args: Update) -> Result<(), Error> {
    let custom_avatar = match args.avatar {
        Some(path) => Some(to_data_url(&path)?),
        None => None,
    };

    let mut store = open_store(dir)?;

    let profile = store.update_profile(ProfileUpdate {
        display_name: args.display_name,
        bio: args.bio,
        custom_avatar,
    })?;

    println!("✅ Profile Updated\nDisplay Name: {}", profile.display_name);

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Follow {
    address: Address,
}

fn follow(dir: &Path, args: Follow) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.toggle_follow(&args.address)? {
        Some(true) => println!("✅ Now Following {}", args.address.shorten()),
        Some(false) => println!("✅ Unfollowed {}", args.address.shorten()),
        None => println!("Cannot follow yourself."),
    }

    Ok(())
}
