use std::path::{Path, PathBuf};

use clap::Parser;

use soapbox::utils::to_data_url;

use upload_api::UploadService;

use url::Url;

use uuid::Uuid;

use crate::{cli::open_store, errors::Error};

#[derive(Debug, Parser)]
pub struct PostCLI {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Create a new post.
    Create(Create),

    /// Delete a post.
    Delete(Delete),

    /// Like or unlike a post.
    Like(Like),

    /// Comment on a post.
    Comment(Comment),
}

pub async fn post_cli(dir: PathBuf, cli: PostCLI) {
    let res = match cli.cmd {
        Command::Create(args) => create(&dir, args).await,
        Command::Delete(args) => delete(&dir, args),
        Command::Like(args) => like(&dir, args),
        Command::Comment(args) => comment(&dir, args),
    };

    if let Err(e) = res {
        eprintln!("❗ Soapbox: {:#?}", e);
    }
}

/// Pass URLs and data URLs through; upload or embed local files.
async fn resolve_media(
    source: Option<String>,
    upload: Option<&UploadService>,
) -> Result<Option<String>, Error> {
    let source = match source {
        Some(source) => source,
        None => return Ok(None),
    };

    if source.starts_with("http://")
        || source.starts_with("https://")
        || source.starts_with("data:")
    {
        return Ok(Some(source));
    }

    let path = Path::new(&source);

    match upload {
        Some(service) => {
            let res = service.upload(path).await?;

            Ok(Some(res.url))
        }
        None => Ok(Some(to_data_url(path)?)),
    }
}

#[derive(Debug, Parser)]
pub struct Create {
    /// The post text content.
    #[arg(short, long)]
    content: Option<String>,

    /// Image; a URL or a local file.
    #[arg(long)]
    image: Option<String>,

    /// Video; a URL or a local file.
    #[arg(long)]
    video: Option<String>,

    /// Upload endpoint; local media is uploaded there instead of embedded.
    #[arg(long)]
    upload: Option<Url>,
}

async fn create(dir: &Path, args: Create) -> Result<(), Error> {
    let service = args.upload.map(UploadService::new);

    let image = resolve_media(args.image, service.as_ref()).await?;
    let video = resolve_media(args.video, service.as_ref()).await?;

    let mut store = open_store(dir)?;

    let id = store.create_post(args.content.as_deref().unwrap_or(""), image, video)?;

    println!("✅ Post Created\nID: {}", id);

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Delete {
    id: Uuid,

    /// Delete regardless of author; admin only.
    #[arg(long)]
    any: bool,
}

fn delete(dir: &Path, args: Delete) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    let deleted = if args.any {
        store.delete_any_post(args.id)?
    } else {
        store.delete_post(args.id)?
    };

    match deleted {
        Some(_) => println!("✅ Post Deleted"),
        None => println!("Nothing to delete."),
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Like {
    id: Uuid,
}

fn like(dir: &Path, args: Like) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.toggle_like(args.id)? {
        Some(true) => println!("✅ Post Liked"),
        Some(false) => println!("✅ Like Removed"),
        None => println!("Post not found."),
    }

    Ok(())
}

#[derive(Debug, Parser)]
pub struct Comment {
    id: Uuid,

    /// The comment text.
    #[arg(short, long)]
    content: String,
}

fn comment(dir: &Path, args: Comment) -> Result<(), Error> {
    let mut store = open_store(dir)?;

    match store.add_comment(args.id, &args.content)? {
        Some(id) => println!("✅ Comment Added\nID: {}", id),
        None => println!("Post not found."),
    }

    Ok(())
}
