use std::path::Path;

use anyhow::{Context, Result};
use scraper::Html;

mod pretty;

pub use pretty::prettify;

/// Parse a full HTML document. Malformed markup is repaired, never rejected.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Overwrite `path` with the prettified document; returns the bytes written.
pub fn dump(path: &Path, doc: &Html) -> Result<usize> {
    let pretty = prettify(doc);
    std::fs::write(path, pretty.as_bytes()).with_context(|| format!("writing debug copy to {}", path.display()))?;
    Ok(pretty.len())
}
