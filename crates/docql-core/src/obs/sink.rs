//! Metrics sink boundary.
//!
//! Compiler logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics;
use std::cell::Cell;

type SinkPtr = *const dyn MetricsSink;

thread_local! {
    // innermost scoped sink of this thread, if any
    static SCOPED_SINK: Cell<Option<SinkPtr>> = const { Cell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    CompileStart,
    CompileFinish { predicates: u64 },
    CompileRejected { kind: &'static str },
    FieldResolved { system: bool },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::CompileStart => {
                metrics::with_state_mut(|m| {
                    m.ops.compile_calls = m.ops.compile_calls.saturating_add(1);
                });
            }

            MetricsEvent::CompileFinish { predicates } => {
                metrics::with_state_mut(|m| {
                    m.ops.compiles_finished = m.ops.compiles_finished.saturating_add(1);
                    metrics::add_predicates(
                        &mut m.ops.predicates_emitted,
                        &mut m.ops.predicates_max,
                        predicates,
                    );
                });
            }

            MetricsEvent::CompileRejected { kind } => {
                metrics::with_state_mut(|m| {
                    m.ops.compiles_rejected = m.ops.compiles_rejected.saturating_add(1);
                    let entry = m.rejections.entry(kind.to_string()).or_default();
                    *entry = entry.saturating_add(1);
                });
            }

            MetricsEvent::FieldResolved { system } => {
                metrics::with_state_mut(|m| {
                    m.ops.fields_resolved = m.ops.fields_resolved.saturating_add(1);
                    if system {
                        m.ops.system_fields_resolved = m.ops.system_fields_resolved.saturating_add(1);
                    }
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    match SCOPED_SINK.with(Cell::get) {
        // SAFETY: only `SinkScope::enter` stores pointers here, each taken
        // from a borrow that outlives the scope, and the scope puts the
        // previous value back when dropped. The call below is synchronous.
        Some(ptr) => unsafe { (*ptr).record(event) },
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the counters of the current thread.
///
/// `window_start_ms` filters by the window start, not by per-event timestamps.
#[must_use]
pub fn metrics_report(window_start_ms: Option<u64>) -> metrics::CompileReport {
    metrics::report_window_start(window_start_ms)
}

/// Reset all counters of the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Route every event recorded on this thread to `sink` while `f` runs.
/// Scopes nest; the enclosing sink is back in place once `f` returns or
/// unwinds.
#[cfg(test)]
pub(crate) fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    let _scope = SinkScope::enter(sink);

    f()
}

///
/// SinkScope
///
/// Installs a scoped sink and reinstates the enclosing one on drop.
///

#[cfg(test)]
struct SinkScope {
    enclosing: Option<SinkPtr>,
}

#[cfg(test)]
impl SinkScope {
    fn enter(sink: &dyn MetricsSink) -> Self {
        // SAFETY: erases the borrow's lifetime only. The pointer leaves the
        // slot when this scope drops, before the borrow ends.
        let ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, SinkPtr>(sink) };

        Self {
            enclosing: SCOPED_SINK.with(|slot| slot.replace(Some(ptr))),
        }
    }
}

#[cfg(test)]
impl Drop for SinkScope {
    fn drop(&mut self) {
        SCOPED_SINK.with(|slot| slot.set(self.enclosing));
    }
}

/// Span
/// Emits the start event on creation and exactly one outcome event.
/// A span dropped without an outcome (unwinding) counts as rejected.

pub(crate) struct Span {
    finished: bool,
}

impl Span {
    #[must_use]
    pub(crate) fn new() -> Self {
        record(MetricsEvent::CompileStart);

        Self { finished: false }
    }

    pub(crate) fn finish(mut self, predicates: u64) {
        record(MetricsEvent::CompileFinish { predicates });
        self.finished = true;
    }

    pub(crate) fn reject(mut self, kind: &'static str) {
        record(MetricsEvent::CompileRejected { kind });
        self.finished = true;
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        if !self.finished {
            record(MetricsEvent::CompileRejected { kind: "aborted" });
            self.finished = true;
        }
    }
}
