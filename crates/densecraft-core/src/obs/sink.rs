//! Metrics sink boundary.
//!
//! Pattern logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through PatternEvent and MetricsSink.
use crate::{obs::metrics, pattern::SlotSide};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// DecodeOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeOutcome {
    Complete,
    MissingPayload,
    Incomplete(SlotSide),
}

///
/// PatternEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatternEvent {
    Ingest { side: SlotSide, accepted: bool },
    Encode { entries: u64 },
    Decode { outcome: DecodeOutcome },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: PatternEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: PatternEvent) {
        metrics::with_state_mut(|m| match event {
            PatternEvent::Ingest { side, accepted } => {
                let counter = match (side, accepted) {
                    (SlotSide::Inputs, true) => &mut m.ops.inputs_accepted,
                    (SlotSide::Inputs, false) => &mut m.ops.inputs_rejected,
                    (SlotSide::Outputs, true) => &mut m.ops.outputs_accepted,
                    (SlotSide::Outputs, false) => &mut m.ops.outputs_rejected,
                };
                *counter = counter.saturating_add(1);
            }

            PatternEvent::Encode { entries } => {
                m.ops.encodes = m.ops.encodes.saturating_add(1);
                m.ops.entries_written = m.ops.entries_written.saturating_add(entries);
            }

            PatternEvent::Decode { outcome } => {
                let counter = match outcome {
                    DecodeOutcome::Complete => &mut m.ops.decodes_complete,
                    DecodeOutcome::MissingPayload => &mut m.ops.decodes_missing_payload,
                    DecodeOutcome::Incomplete(_) => &mut m.ops.decodes_incomplete,
                };
                *counter = counter.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: PatternEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a live `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous slot on every exit, unwinding included.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the original borrow.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The pointer is installed only for this dynamic scope and `Guard`
    //   restores the previous slot on all exits.
    // - `record` only dereferences synchronously and never persists it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
