use std::io::{self, Write};

use serde_json::Value;

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Prints the bare `value` of the result, like a plain `print`.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        match env.result.get("value") {
            Some(Value::String(s)) => writeln!(w, "{}", s),
            _ => {
                if self.pretty { serde_json::to_writer_pretty(&mut *w, &env.result).map_err(to_io)?; } else { serde_json::to_writer(&mut *w, &env.result).map_err(to_io)?; }
                writeln!(w)
            }
        }
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_config(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(p: &dyn Presenter, env: &Envelope) -> String {
        let mut buf: Vec<u8> = Vec::new();
        p.emit(env, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_prints_only_the_value() {
        let env = Envelope::result("chapter", &json!({"value": "Third paragraph.", "index": 2}), None).unwrap();
        assert_eq!(render(&TextPresenter { pretty: false }, &env), "Third paragraph.\n");
    }

    #[test]
    fn text_falls_back_to_json_without_value() {
        let env = Envelope::result("select", &json!({"count": 0}), None).unwrap();
        assert_eq!(render(&TextPresenter { pretty: false }, &env), "{\"count\":0}\n");
    }

    #[test]
    fn json_prints_one_envelope_line() {
        let env = Envelope::result("cover", &json!({"value": "cover.jpg"}), None).unwrap();
        let out = render(&JsonPresenter { pretty: false }, &env);
        assert_eq!(out.lines().count(), 1);
        let v: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["result"]["value"], "cover.jpg");
        assert_eq!(v["op"], "cover");
    }
}
