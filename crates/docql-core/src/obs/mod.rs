//! Observability: compile counters and the sink abstraction.
//!
//! Counters are thread-local; each thread reports its own compiles.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{CompileCounters, CompileOps, CompileReport, RejectionSummary};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
