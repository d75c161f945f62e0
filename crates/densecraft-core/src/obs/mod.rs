//! Observability: in-process pattern telemetry and sink abstractions.
//!
//! The pattern layer never prints. Every instrumentation point emits a
//! `PatternEvent`, and the active `MetricsSink` decides what to keep.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    DecodeOutcome, MetricsSink, PatternEvent, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
