use std::env;
use std::sync::OnceLock;

static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// `--json` on the command line; wins over PROBE_OUTPUT_FORMAT.
pub fn set_json_mode(v: bool) {
    let _ = JSON_MODE.set(v);
}

pub fn json_mode() -> bool {
    *JSON_MODE.get().unwrap_or(&false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::from_values(
            env::var("PROBE_OUTPUT_FORMAT").ok().as_deref(),
            env::var("PROBE_OUTPUT_PRETTY").ok().as_deref(),
        );
        if json_mode() { cfg.format = OutputFormat::Json; }
        cfg
    }

    fn from_values(format: Option<&str>, pretty: Option<&str>) -> Self {
        let format = match format {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        let pretty = match pretty {
            Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => true,
            _ => false,
        };
        OutputConfig { format, pretty }
    }
}
