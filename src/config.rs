use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEBUG_FILE: &str = "test.html";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Proxy URL, e.g. http://proxy.local:8080
    pub proxy: Option<String>,
    /// Where the prettified document is written on every run.
    pub debug_file: PathBuf,
    /// Request timeout; `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            debug_file: PathBuf::from(DEFAULT_DEBUG_FILE),
            timeout: None,
        }
    }
}

impl ProbeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(proxy) = lookup("PROBE_PROXY") {
            if !proxy.trim().is_empty() {
                cfg.proxy = Some(proxy);
            }
        }
        if let Some(path) = lookup("PROBE_DEBUG_FILE") {
            if !path.trim().is_empty() {
                cfg.debug_file = PathBuf::from(path);
            }
        }
        if let Some(timeout) = lookup("PROBE_TIMEOUT_SECS") {
            // 0 means no timeout
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = (parsed > 0).then(|| Duration::from_secs(parsed));
            }
        }
        cfg
    }

    /// CLI flags win over the environment.
    pub fn with_overrides(mut self, proxy: Option<String>, debug_file: Option<PathBuf>) -> Self {
        if let Some(proxy) = proxy {
            self.proxy = Some(proxy);
        }
        if let Some(path) = debug_file {
            self.debug_file = path;
        }
        self
    }
}
