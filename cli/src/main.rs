mod cli;
mod errors;
mod server;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        ad::{ad_cli, AdCLI},
        feed::{feed_cli, Feed},
        post::{post_cli, PostCLI},
        profile::{profile_cli, ProfileCLI},
        session::{session_cli, SessionCLI},
    },
    server::{serve_cli, Serve},
};

#[derive(Parser)]
#[command(name = "soapbox", bin_name = "soapbox", version, about, long_about = None, rename_all = "kebab-case")]
struct Soapbox {
    /// Storage directory.
    #[arg(long, global = true, default_value = ".soapbox")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Wallet session commands.
    Session(SessionCLI),

    /// Profile and follow commands.
    Profile(ProfileCLI),

    /// Post related commands.
    Post(PostCLI),

    /// Read the feed.
    Feed(Feed),

    /// Advertisement related commands.
    Ad(AdCLI),

    /// Start the file upload server daemon.
    Serve(Serve),
}

#[tokio::main]
async fn main() {
    let cli = Soapbox::parse();

    match cli.command {
        Commands::Session(args) => session_cli(cli.dir, args).await,
        Commands::Profile(args) => profile_cli(cli.dir, args).await,
        Commands::Post(args) => post_cli(cli.dir, args).await,
        Commands::Feed(args) => feed_cli(cli.dir, args).await,
        Commands::Ad(args) => ad_cli(cli.dir, args).await,
        Commands::Serve(args) => serve_cli(args).await,
    }
}
