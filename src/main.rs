use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;

mod config;
mod demo;
mod document;
mod fetch;
mod output;
mod pipeline;
mod query;
mod select;
mod telemetry;

#[derive(Parser)]
#[command(name = "probe", version, about = "Fetch a page, query it with a CSS selector, print the match")]
struct Cli {
    /// Proxy URL. Example: http://proxy.local:8080
    #[arg(global = true, short, long)]
    proxy: Option<String>,
    /// Where the prettified copy of the parsed page is written
    #[arg(global = true, long)]
    debug_file: Option<PathBuf>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Cover(demo::CoverCmd),
    Chapter(demo::ChapterCmd),
    Select(select::SelectCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    output::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and PROBE_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = config::ProbeConfig::from_env().with_overrides(cli.proxy, cli.debug_file);

    match cli.command {
        Commands::Cover(args) => demo::cover(&cfg, args).await?,
        Commands::Chapter(args) => demo::chapter(&cfg, args).await?,
        Commands::Select(args) => select::run(&cfg, args).await?,
    }

    Ok(())
}
