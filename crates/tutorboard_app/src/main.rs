mod app;
mod commands;
mod effects;
mod logging;
mod persistence;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tutorboard_catalog::{CatalogSource, FixtureCatalog, JsonFileCatalog};
use tutorboard_core::DEFAULT_PAGE_SIZE;

const FIXTURE_COURSE_COUNT: u64 = 28;

/// Instructor course dashboard for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tutorboard", version)]
struct Args {
    /// JSON catalog file; a built-in fixture catalog is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Courses shown per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    log: logging::LogDestination,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);

    let source: Box<dyn CatalogSource> = match &args.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
        None => Box::new(FixtureCatalog::new(FIXTURE_COURSE_COUNT)),
    };
    let prefs_path = persistence::prefs_path(args.catalog.as_deref());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app::run(args.page_size, source, prefs_path, stdin.lock(), &mut stdout)
        .context("dashboard loop failed")
}
