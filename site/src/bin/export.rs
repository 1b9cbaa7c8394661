//! Static snapshot exporter: pre-renders the page for each tab to HTML.

use std::path::PathBuf;

use aesthetic_site::config::SiteConfig;
use aesthetic_site::export::{export_snapshots, ExportOptions};
use aesthetic_site::state::Tab;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "aesthetic-export")]
#[command(about = "Pre-render the Aesthetic site to static HTML, one file per tab")]
#[command(version)]
struct Args {
    /// Directory to write snapshots into
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Tab to export (home, features, pricing, about). Repeat for several; default is all
    #[arg(long = "tab", value_name = "TAB")]
    tabs: Vec<Tab>,

    /// Render with the mobile menu open
    #[arg(long)]
    menu_open: bool,

    /// JSON file with site config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    let options = ExportOptions {
        out_dir: args.out_dir,
        tabs: args.tabs,
        menu_open: args.menu_open,
        config,
    };

    let written = export_snapshots(&options)?;
    info!(count = written.len(), dir = %options.out_dir.display(), "export finished");
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
