use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Where a page comes from: fetched over HTTP or read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid URL {}: {}", raw, e))?;
            return Ok(Source::Url(url));
        }
        Ok(Source::File(PathBuf::from(raw)))
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Source::Url(u) => Some(u),
            Source::File(_) => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => write!(f, "{}", u),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_strings_become_urls() {
        let src = Source::parse("https://novelfull.com/some-novel.html").unwrap();
        assert_eq!(src.url().map(|u| u.host_str()), Some(Some("novelfull.com")));
    }

    #[test]
    fn other_strings_are_paths() {
        let src = Source::parse("fixtures/page.html").unwrap();
        assert_eq!(src, Source::File(PathBuf::from("fixtures/page.html")));
        assert!(src.url().is_none());
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(Source::parse("http://").is_err());
    }
}
