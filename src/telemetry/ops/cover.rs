use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::OpMarker;
use super::probe::Phase;

#[derive(Copy, Clone, Debug)]
pub struct Cover;

impl OpMarker for Cover {
    const NAME: &'static str = "cover";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("cover") }
}
