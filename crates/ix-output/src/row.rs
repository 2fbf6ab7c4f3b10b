//! Plain data row types written by trace backends.

use ix_core::Event;

/// One dispatched event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub time: f64,
    pub kind: &'static str,
    /// Lane pair halves; `None` for lane-less kinds.
    pub from: Option<u32>,
    pub to:   Option<u32>,
}

impl From<&Event> for TraceRow {
    fn from(event: &Event) -> Self {
        let lane = event.lane();
        Self {
            time: event.time().minutes(),
            kind: event.kind().as_str(),
            from: lane.map(|l| l.from),
            to:   lane.map(|l| l.to),
        }
    }
}
