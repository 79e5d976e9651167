use anyhow::Result;
use clap::Args;
use std::time::Instant;

use crate::config::ProbeConfig;
use crate::fetch::Source;
use crate::output::Meta;
use crate::pipeline::{self, Job, Outcome};
use crate::query::{Field, Pick, Query};
use crate::telemetry;

pub mod presets;

/// Print the cover image `src` of a novelfull novel page.
#[derive(Args, Debug)]
pub struct CoverCmd {
    /// Novel page to probe instead of the built-in one
    #[arg(long, default_value = presets::COVER_URL)]
    pub url: String,
    /// Print an absolute URL instead of the raw attribute
    #[arg(long, default_value_t = false)]
    pub resolve: bool,
}

/// Print the text of one paragraph of a novelfull chapter page.
#[derive(Args, Debug)]
pub struct ChapterCmd {
    /// Chapter page to probe instead of the built-in one
    #[arg(long, default_value = presets::CHAPTER_URL)]
    pub url: String,
    /// Zero-based paragraph index
    #[arg(long, default_value_t = presets::CHAPTER_INDEX)]
    pub index: usize,
}

impl CoverCmd {
    fn job(&self) -> Result<Job> {
        Ok(Job {
            source: Source::parse(&self.url)?,
            query: Query::new(presets::COVER_SELECTOR, Pick::First, Field::Attr(presets::COVER_ATTR.to_string()))?,
            resolve: self.resolve,
        })
    }
}

impl ChapterCmd {
    fn job(&self) -> Result<Job> {
        Ok(Job {
            source: Source::parse(&self.url)?,
            query: Query::new(presets::CHAPTER_SELECTOR, Pick::Nth(self.index), Field::Text)?,
            resolve: false,
        })
    }
}

pub async fn cover(cfg: &ProbeConfig, args: CoverCmd) -> Result<()> {
    let log = telemetry::cover();
    let _g = log.root_span_kv([("url", args.url.clone()), ("resolve", args.resolve.to_string())]).entered();
    let t0 = Instant::now();

    let outcome = pipeline::run(&log, cfg, &args.job()?).await?;
    log.info_kv("🖼️ cover found", [("src", outcome.value.clone())]);
    log.result(&outcome, Some(meta(cfg, t0)))
}

pub async fn chapter(cfg: &ProbeConfig, args: ChapterCmd) -> Result<()> {
    let log = telemetry::chapter();
    let _g = log.root_span_kv([("url", args.url.clone()), ("index", args.index.to_string())]).entered();
    let t0 = Instant::now();

    let outcome: Outcome = pipeline::run(&log, cfg, &args.job()?).await?;
    log.info_kv("📖 paragraph found", [("index", outcome.index.to_string()), ("chars", outcome.value.chars().count().to_string())]);
    log.result(&outcome, Some(meta(cfg, t0)))
}

fn meta(cfg: &ProbeConfig, t0: Instant) -> Meta {
    Meta { duration_ms: Some(t0.elapsed().as_millis()), debug_file: Some(cfg.debug_file.display().to_string()) }
}
