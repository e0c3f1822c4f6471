use std::path::{Path, PathBuf};

use clap::Parser;

use crate::{
    cli::{keystore_wallet, open_store},
    errors::Error,
};

#[derive(Debug, Parser)]
pub struct SessionCLI {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Connect the wallet and restore or create your profile.
    Connect,

    /// Disconnect the wallet and forget the session.
    Disconnect,

    /// Print the connected address.
    Whoami,
}

pub async fn session_cli(dir: PathBuf, cli: SessionCLI) {
    let res = match cli.cmd {
        Command::Connect => connect(&dir),
        Command::Disconnect => disconnect(&dir),
        Command::Whoami => whoami(&dir),
    };

    if let Err(e) = res {
        eprintln!("❗ Soapbox: {:#?}", e);
    }
}

fn connect(dir: &Path) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    let wallet = keystore_wallet(dir);

    let profile = store.connect(&wallet)?;

    let note = if store.has_profile(&profile.address) {
        ""
    } else {
        " (new)"
    };

    println!(
        "✅ Wallet Connected\nAddress: {}\nProfile: {}{}",
        profile.address, profile.display_name, note
    );

    Ok(())
}

fn disconnect(dir: &Path) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    let wallet = keystore_wallet(dir);

    store.disconnect(&wallet);

    println!("✅ Wallet Disconnected");

    Ok(())
}

fn whoami(dir: &Path) -> Result<(), Error> {
    let store = open_store(dir)?;

    match store.current_profile() {
        Some(profile) => println!(
            "✅ Connected As {} ({})",
            profile.display_name, profile.address
        ),
        None => println!("No wallet connected."),
    }

    Ok(())
}
