mod services;

use std::{convert::Infallible, net::SocketAddr, path::PathBuf};

use clap::Parser;

use hyper::{
    service::{make_service_fn, service_fn},
    Server,
};

use tokio::{signal::ctrl_c, sync::watch};

#[derive(Debug, Parser)]
pub struct Serve {
    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:2727")]
    address: SocketAddr,

    /// Directory uploaded files are stored in.
    #[arg(long, default_value = "uploads")]
    uploads: PathBuf,
}

pub async fn serve_cli(args: Serve) {
    let Serve { address, uploads } = args;

    let (tx, mut shutdown) = watch::channel::<()>(());

    tokio::spawn(async move {
        ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        if let Err(e) = tx.send(()) {
            eprintln!("{}", e);
        }
    });

    let service = make_service_fn(move |_| {
        let uploads = uploads.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                services::requests(req, uploads.clone())
            }))
        }
    });

    let server = Server::bind(&address).serve(service);

    println!("✅ Upload Server Online");

    let graceful = server.with_graceful_shutdown(async {
        if let Err(e) = shutdown.changed().await {
            eprintln!("{}", e);
        }
    });

    if let Err(e) = graceful.await {
        eprintln!("Server: {}", e);
    }

    println!("❌ Upload Server Offline");
}
