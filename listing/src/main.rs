use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use listing::{templates::base, PostsListing};
use maud::Render;
use posts::{Heading, Posts};
use tracing::instrument;

/// Renders a post list file as a listing of thumbnail cards.
#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    /// JSON (`.json`) or YAML file holding the list of posts
    file: PathBuf,

    /// Heading level used for every card title
    #[arg(long, default_value_t = Heading::H3)]
    heading: Heading,

    /// Mark the listing as the primary one on the page
    #[arg(long)]
    primary: bool,

    /// Wrap the listing in a full HTML document
    #[arg(long)]
    page: bool,
}

#[instrument]
fn read_posts(file: &Path) -> Result<Posts> {
    let contents = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Couldn't read {}", file.display()))?;

    decode_posts(file, &contents)
}

fn decode_posts(file: &Path, contents: &str) -> Result<Posts> {
    let posts = if file.extension().is_some_and(|ext| ext == "json") {
        Posts::from_json(contents)
    } else {
        Posts::from_yaml(contents)
    }
    .wrap_err_with(|| format!("Couldn't decode posts from {}", file.display()))?;

    tracing::info!(count = posts.len(), "Loaded posts");

    for slug in posts.duplicate_slugs() {
        tracing::warn!(slug, "Duplicate post slug, cards will share a key");
    }

    Ok(posts)
}

fn main() -> Result<()> {
    tracing_common::setup_tracing("listing")?;

    let args = CliArgs::parse();
    let posts = read_posts(&args.file)?;

    let listing = PostsListing::from(&posts)
        .with_heading(args.heading)
        .primary(args.primary);

    let markup = if args.page {
        base(listing.render())
    } else {
        listing.render()
    };

    println!("{}", markup.into_string());

    Ok(())
}
