//! Client-history diffing pipeline.
//!
//! Turns a newest-first list of client snapshots into a deduplicated,
//! human-readable changelog:
//!
//! ```text
//! snapshots → dedup_snapshots → retained pairs
//!           → diff_snapshots  → elementary change set
//!           → render_changes  → per-snapshot changelog entries
//! ```
//!
//! ## Entry points
//!
//! ```
//! use fleetscope_core::diff::compute_client_versions;
//! # use fleetscope_core::model::ClientSnapshot;
//! # let snapshots: Vec<ClientSnapshot> = Vec::new();
//!
//! let versions = compute_client_versions(&snapshots);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output, including
//!   change ordering, regardless of collection ordering within snapshots.
//! - **Totality**: no failure modes; empty input yields empty output.
//! - **Timestamp noise suppression**: capture-time metadata never counts as
//!   an observable change.
//!
//! The pipeline is a pure function of its input list; callers own
//! re-invocation timing and there are no internal subscriptions or caches.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use crate::model::ClientSnapshot;

pub mod dedup;
pub mod engine;
pub mod model;
pub mod summary;

pub use dedup::dedup_snapshots;
pub use engine::diff_snapshots;
pub use model::{ChangeKind, ClientVersion, ElementaryChange, SnapshotEntry};
pub use summary::{render_changes, CHANGES_COLLAPSE_THRESHOLD, CLIENT_CREATED};

/// Compute the changelog timeline for one client's snapshot history.
///
/// `snapshots` must be newest-first and belong to a single client. The
/// result has exactly one [`ClientVersion`] per retained snapshot, also
/// newest-first. The oldest retained snapshot carries the literal
/// `["Client created"]`; every other entry's changes are derived from the
/// diff against the next-older retained snapshot and are never empty.
pub fn compute_client_versions(snapshots: &[ClientSnapshot]) -> Vec<ClientVersion> {
    let start = Instant::now();
    crate::log_op_start!(
        "compute_client_versions",
        snapshot_count = snapshots.len()
    );

    let retained = dedup_snapshots(snapshots);

    let mut change_lists: Vec<Vec<String>> = Vec::with_capacity(retained.len());
    for (index, snapshot) in retained.iter().enumerate() {
        let changes = match retained.get(index + 1) {
            Some(older) => render_changes(&diff_snapshots(snapshot, older)),
            None => vec![CLIENT_CREATED.to_string()],
        };
        change_lists.push(changes);
    }

    let versions: Vec<ClientVersion> = retained
        .into_iter()
        .zip(change_lists)
        .map(|(client, changes)| ClientVersion { client, changes })
        .collect();

    crate::log_op_end!(
        "compute_client_versions",
        duration_ms = start.elapsed().as_millis() as u64,
        version_count = versions.len()
    );
    versions
}

/// Index retained snapshots by the entries they changed.
///
/// For each [`SnapshotEntry`], the newest-first list of retained snapshots
/// whose pairwise diff against the next-older retained snapshot touched that
/// entry. Entries that never changed are absent; the oldest retained
/// snapshot contributes nothing (its "Client created" entry is synthetic).
/// The presentation layer uses this to decide which fields deserve a
/// history affordance.
pub fn client_entries_changed(
    snapshots: &[ClientSnapshot],
) -> BTreeMap<SnapshotEntry, Vec<ClientSnapshot>> {
    let start = Instant::now();
    crate::log_op_start!(
        "client_entries_changed",
        snapshot_count = snapshots.len()
    );

    let retained = dedup_snapshots(snapshots);

    let mut index: BTreeMap<SnapshotEntry, Vec<ClientSnapshot>> = BTreeMap::new();
    for window in retained.windows(2) {
        let (newer, older) = (&window[0], &window[1]);
        // One membership per snapshot per entry, even when the same entry
        // changed under several kinds in one pair.
        let entries: BTreeSet<SnapshotEntry> = diff_snapshots(newer, older)
            .into_iter()
            .map(|change| change.entry)
            .collect();
        for entry in entries {
            index.entry(entry).or_default().push(newer.clone());
        }
    }

    crate::log_op_end!(
        "client_entries_changed",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = index.len()
    );
    index
}
