use reqwest::{Client, ClientBuilder, Proxy, StatusCode};

use crate::config::ProbeConfig;

mod source;

pub use source::Source;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid proxy {proxy}: {source}")]
    Proxy { proxy: String, source: reqwest::Error },
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not read {path}: {source}")]
    File { path: String, source: std::io::Error },
}

impl FetchError {
    fn http(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Http(err) }
    }
}

pub fn build_client(cfg: &ProbeConfig) -> Result<Client, FetchError> {
    let mut builder = ClientBuilder::new()
        .cookie_store(true)
        .deflate(true)
        .gzip(true)
        .brotli(true);

    if let Some(proxy) = cfg.proxy.as_deref() {
        let p = Proxy::all(proxy).map_err(|source| FetchError::Proxy { proxy: proxy.to_string(), source })?;
        builder = builder.proxy(p);
    }
    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(FetchError::http)
}

pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send().await.map_err(FetchError::http)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }
    resp.text().await.map_err(FetchError::http)
}

/// Fetch a URL or read a local file, depending on the source.
pub async fn load(client: &Client, source: &Source) -> Result<String, FetchError> {
    match source {
        Source::Url(url) => fetch_page(client, url.as_str()).await,
        Source::File(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|source| FetchError::File {
                path: path.display().to_string(),
                source,
            })?;
            // saved pages are not always utf-8
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
