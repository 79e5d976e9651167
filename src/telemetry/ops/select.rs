use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::OpMarker;
use super::probe::Phase;

#[derive(Copy, Clone, Debug)]
pub struct Select;

impl OpMarker for Select {
    const NAME: &'static str = "select";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("select") }
}
