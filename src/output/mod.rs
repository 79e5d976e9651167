use anyhow::Result;
use serde::Serialize;

pub mod config;
mod presenter;
mod types;

pub use presenter::Emitter;
pub use types::{Envelope, Meta};

pub fn emit_result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<()> {
    let env = Envelope::result(op, result, meta)?;
    let emitter = Emitter::from_config(config::OutputConfig::from_env());
    emitter.emit(&env)?;
    Ok(())
}
