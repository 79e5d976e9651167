use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::PhaseSpan;

/// Steps of the fetch → parse → dump → select pipeline, shared by every probe command.
#[derive(Copy, Clone, Debug)]
pub enum Phase { Fetch, Parse, Dump, Select }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Fetch => "fetch",
        Phase::Parse => "parse",
        Phase::Dump => "dump",
        Phase::Select => "select",
    }}
    fn span(&self) -> Span { match self {
        Phase::Fetch => info_span!("fetch"),
        Phase::Parse => info_span!("parse"),
        Phase::Dump => info_span!("dump"),
        Phase::Select => info_span!("select"),
    }}
}
