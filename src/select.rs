use anyhow::Result;
use clap::Args;
use std::time::Instant;

use crate::config::ProbeConfig;
use crate::fetch::Source;
use crate::output::Meta;
use crate::pipeline::{self, Job};
use crate::telemetry;

/// Fetch SOURCE (URL or local file), query it with SELECTOR and print the match.
#[derive(Args, Debug)]
pub struct SelectCmd {
    /// http(s) URL or path to a saved HTML file
    pub source: String,
    /// CSS selector, e.g. ".book > img"
    pub selector: String,
    /// Print this attribute instead of the text content
    #[arg(long, conflicts_with = "html")]
    pub attr: Option<String>,
    /// Print the inner HTML instead of the text content
    #[arg(long, default_value_t = false)]
    pub html: bool,
    /// Zero-based index into the matches (default: first match)
    #[arg(long)]
    pub nth: Option<usize>,
    /// Make an attribute value absolute against the page URL
    #[arg(long, default_value_t = false)]
    pub resolve: bool,
}

pub async fn run(cfg: &ProbeConfig, args: SelectCmd) -> Result<()> {
    let log = telemetry::select();
    let _g = log.root_span_kv([
        ("source", args.source.clone()),
        ("selector", args.selector.clone()),
        ("attr", format!("{:?}", args.attr)),
        ("html", args.html.to_string()),
        ("nth", format!("{:?}", args.nth)),
        ("resolve", args.resolve.to_string()),
    ]).entered();
    let t0 = Instant::now();

    let job = Job {
        source: Source::parse(&args.source)?,
        query: pipeline::build_query(&args.selector, args.nth, args.attr, args.html)?,
        resolve: args.resolve,
    };
    let outcome = pipeline::run(&log, cfg, &job).await?;
    log.info_kv("🔎 match", [("selector", outcome.selector.clone()), ("index", outcome.index.to_string())]);

    let meta = Meta { duration_ms: Some(t0.elapsed().as_millis()), debug_file: Some(cfg.debug_file.display().to_string()) };
    log.result(&outcome, Some(meta))
}
