use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::ProbeConfig;
use crate::document;
use crate::fetch::{self, Source};
use crate::query::{self, Field, Pick, Query};
use crate::telemetry::ctx::{LogCtx, OpMarker};
use crate::telemetry::ops::probe::Phase;

/// One probe run: where to look and what to pull out.
#[derive(Debug, Clone)]
pub struct Job {
    pub source: Source,
    pub query: Query,
    /// Join attribute values against the page URL.
    pub resolve: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Outcome {
    pub source: String,
    pub selector: String,
    pub index: usize,
    pub field: String,
    pub value: String,
}

pub async fn run<O>(log: &LogCtx<O>, cfg: &ProbeConfig, job: &Job) -> Result<Outcome>
where
    O: OpMarker<Phase = Phase>,
{
    let html = {
        let _s = log.span_kv(&Phase::Fetch, [("source", job.source.to_string())]).entered();
        let client = fetch::build_client(cfg)?;
        fetch::load(&client, &job.source).await.with_context(|| format!("loading {}", job.source))?
    };
    log.debug_kv("loaded", [("bytes", html.len().to_string())]);

    let doc = {
        let _s = log.span(&Phase::Parse).entered();
        document::parse(&html)
    };

    {
        let _s = log.span_kv(&Phase::Dump, [("path", cfg.debug_file.display().to_string())]).entered();
        let written = document::dump(&cfg.debug_file, &doc)?;
        log.debug_kv("debug copy written", [("path", cfg.debug_file.display().to_string()), ("bytes", written.to_string())]);
    }

    let value = {
        let _s = log.span_kv(&Phase::Select, [
            ("selector", job.query.selector().to_string()),
            ("index", job.query.pick.index().to_string()),
            ("field", job.query.field.to_string()),
        ]).entered();
        let matches = query::select_all(&doc, &job.query).len();
        log.debug_kv("matched", [("count", matches.to_string())]);
        query::extract(&doc, &job.query)?
    };

    let value = if job.resolve { resolve(log, job, value) } else { value };

    Ok(Outcome {
        source: job.source.to_string(),
        selector: job.query.selector().to_string(),
        index: job.query.pick.index(),
        field: job.query.field.to_string(),
        value,
    })
}

/// Make an attribute value absolute against the page URL.
/// Leaves the value untouched when there is nothing to join against.
fn resolve<O: OpMarker>(log: &LogCtx<O>, job: &Job, value: String) -> String {
    if !matches!(job.query.field, Field::Attr(_)) {
        return value;
    }
    let Some(base) = job.source.url() else {
        log.warn_kv("cannot resolve against a local file", [("value", value.clone())]);
        return value;
    };
    match base.join(&value) {
        Ok(abs) => abs.to_string(),
        Err(e) => {
            log.warn_kv("could not resolve", [("value", value.clone()), ("error", e.to_string())]);
            value
        }
    }
}

/// Build the query for a command from its raw flags.
pub fn build_query(selector: &str, nth: Option<usize>, attr: Option<String>, html: bool) -> Result<Query> {
    let pick = match nth {
        Some(i) => Pick::Nth(i),
        None => Pick::First,
    };
    let field = match (attr, html) {
        (Some(name), _) => Field::Attr(name),
        (None, true) => Field::Html,
        (None, false) => Field::Text,
    };
    Ok(Query::new(selector, pick, field)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NOVEL: &str = r#"<html><body><div class="book"><img src="/uploads/thumbs/cover.jpg" alt="cover"></div></body></html>"#;

    fn cfg_in(dir: &tempfile::TempDir) -> ProbeConfig {
        ProbeConfig { debug_file: dir.path().join("test.html"), ..ProbeConfig::default() }
    }

    #[tokio::test]
    async fn runs_against_a_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("novel.html");
        std::fs::write(&page, NOVEL).unwrap();
        let cfg = cfg_in(&dir);

        let job = Job {
            source: Source::File(page.clone()),
            query: build_query(".book > img", None, Some("src".into()), false).unwrap(),
            resolve: false,
        };
        let out = run(&telemetry::cover(), &cfg, &job).await.unwrap();

        assert_eq!(out.value, "/uploads/thumbs/cover.jpg");
        assert_eq!(out.index, 0);
        assert_eq!(out.field, "@src");
        let dumped = std::fs::read_to_string(&cfg.debug_file).unwrap();
        assert!(dumped.contains("<img alt=\"cover\" src=\"/uploads/thumbs/cover.jpg\"/>"));
    }

    #[tokio::test]
    async fn resolves_src_against_the_page_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/novel.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NOVEL))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);

        let url = format!("{}/novel.html", server.uri());
        let job = Job {
            source: Source::parse(&url).unwrap(),
            query: build_query(".book > img", None, Some("src".into()), false).unwrap(),
            resolve: true,
        };
        let out = run(&telemetry::cover(), &cfg, &job).await.unwrap();
        assert_eq!(out.value, format!("{}/uploads/thumbs/cover.jpg", server.uri()));
    }

    #[tokio::test]
    async fn no_match_fails_after_the_debug_copy_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("novel.html");
        std::fs::write(&page, NOVEL).unwrap();
        let cfg = cfg_in(&dir);

        let job = Job {
            source: Source::File(page),
            query: build_query("#chapter-content > p", Some(2), None, false).unwrap(),
            resolve: false,
        };
        let err = run(&telemetry::chapter(), &cfg, &job).await.unwrap_err();
        assert!(err.to_string().contains("matched nothing"), "got: {err}");
        assert!(cfg.debug_file.exists());
    }

    #[tokio::test]
    async fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = cfg_in(&dir);
        let job = Job {
            source: Source::File(PathBuf::from("no/such/page.html")),
            query: build_query("p", None, None, false).unwrap(),
            resolve: false,
        };
        assert!(run(&telemetry::select(), &cfg, &job).await.is_err());
        assert!(!cfg.debug_file.exists());
    }

    #[test]
    fn build_query_prefers_attr_over_html() {
        let q = build_query("a", Some(1), Some("href".into()), true).unwrap();
        assert_eq!(q.field, Field::Attr("href".into()));
        assert_eq!(q.pick, Pick::Nth(1));
    }

    #[test]
    fn build_query_defaults_to_first_text() {
        let q = build_query("p", None, None, false).unwrap();
        assert_eq!(q.field, Field::Text);
        assert_eq!(q.pick, Pick::First);
    }
}
