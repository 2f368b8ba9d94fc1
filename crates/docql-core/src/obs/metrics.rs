use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};
use time::OffsetDateTime;

///
/// CompileCounters
/// Ephemeral, in-memory counters for compile calls on this thread.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CompileCounters {
    pub ops: CompileOps,
    pub rejections: BTreeMap<String, u64>,
    pub window_start_ms: u64,
}

impl Default for CompileCounters {
    fn default() -> Self {
        Self {
            ops: CompileOps::default(),
            rejections: BTreeMap::new(),
            window_start_ms: now_millis(),
        }
    }
}

///
/// CompileOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CompileOps {
    // Entrypoint
    pub compile_calls: u64,
    pub compiles_finished: u64,
    pub compiles_rejected: u64,

    // Output size
    pub predicates_emitted: u64,
    pub predicates_max: u64,

    // Resolver
    pub fields_resolved: u64,
    pub system_fields_resolved: u64,
}

thread_local! {
    static COMPILE_COUNTERS: RefCell<CompileCounters> = RefCell::new(CompileCounters::default());
}

fn now_millis() -> u64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

    u64::try_from(millis).unwrap_or_default()
}

/// Borrow counters immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&CompileCounters) -> R) -> R {
    COMPILE_COUNTERS.with(|m| f(&m.borrow()))
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut CompileCounters) -> R) -> R {
    COMPILE_COUNTERS.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters and restart the window.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = CompileCounters::default());
}

/// Accumulate predicate counts and track a max.
pub(crate) const fn add_predicates(total: &mut u64, max: &mut u64, predicates: u64) {
    *total = total.saturating_add(predicates);
    if predicates > *max {
        *max = predicates;
    }
}

///
/// CompileReport
/// Counter report for observability surfaces.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CompileReport {
    /// Counters since `window_start_ms`, absent when filtered out.
    pub counters: Option<CompileCounters>,
    pub avg_predicates_per_compile: f64,
    pub rejection_summary: Vec<RejectionSummary>,
}

///
/// RejectionSummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RejectionSummary {
    pub kind: String,
    pub count: u64,
    pub share: f64,
}

/// Build a report, returning an empty one when the current window started
/// before `window_start_ms`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn report_window_start(window_start_ms: Option<u64>) -> CompileReport {
    let snap = with_state(Clone::clone);
    if window_start_ms.is_some_and(|requested| requested > snap.window_start_ms) {
        return CompileReport::default();
    }

    let avg_predicates_per_compile = if snap.ops.compiles_finished > 0 {
        snap.ops.predicates_emitted as f64 / snap.ops.compiles_finished as f64
    } else {
        0.0
    };

    let mut rejection_summary: Vec<RejectionSummary> = snap
        .rejections
        .iter()
        .map(|(kind, &count)| RejectionSummary {
            kind: kind.clone(),
            count,
            share: if snap.ops.compiles_rejected > 0 {
                count as f64 / snap.ops.compiles_rejected as f64
            } else {
                0.0
            },
        })
        .collect();

    // most frequent first, ties by kind
    rejection_summary.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kind.cmp(&b.kind)));

    CompileReport {
        counters: Some(snap),
        avg_predicates_per_compile,
        rejection_summary,
    }
}
