use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::OpMarker;
use super::probe::Phase;

#[derive(Copy, Clone, Debug)]
pub struct Chapter;

impl OpMarker for Chapter {
    const NAME: &'static str = "chapter";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("chapter") }
}
