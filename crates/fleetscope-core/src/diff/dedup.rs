//! Snapshot run deduplication.
//!
//! A reporting agent re-transmits its full state on a fixed interval, so a
//! client's history usually contains long runs of snapshots that differ only
//! in capture-time metadata. Surfacing those as "no change" entries would
//! flood the changelog; this pass collapses each run to its chronologically
//! oldest member before any pair is diffed.

use crate::diff::engine::diff_snapshots;
use crate::model::ClientSnapshot;

/// Collapse runs of observably identical snapshots.
///
/// Input must be newest-first. Two adjacent snapshots belong to the same run
/// iff their structural diff is empty, i.e. they agree on every modeled
/// field outside capture-time metadata; collection equality is
/// order-independent. Each run is represented by its oldest member, which
/// keeps its own (earliest) timestamp. Output order remains newest-first.
///
/// Empty input yields empty output; a single snapshot is retained unchanged.
/// The pass is idempotent, and every adjacent pair of the result has a
/// non-empty diff by construction.
pub fn dedup_snapshots(snapshots: &[ClientSnapshot]) -> Vec<ClientSnapshot> {
    let mut retained: Vec<ClientSnapshot> = Vec::new();
    for snapshot in snapshots {
        match retained.last_mut() {
            // Same run: slide the representative to the older member.
            Some(representative) if diff_snapshots(representative, snapshot).is_empty() => {
                *representative = snapshot.clone();
            }
            _ => retained.push(snapshot.clone()),
        }
    }
    retained
}
