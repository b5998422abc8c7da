//! Human-readable rendering of one snapshot pair's change set.

use crate::diff::model::ElementaryChange;

/// Maximum number of elementary changes rendered individually; above this
/// the pair collapses to a single aggregate line.
pub const CHANGES_COLLAPSE_THRESHOLD: usize = 3;

/// Changelog entry of the oldest retained snapshot.
pub const CLIENT_CREATED: &str = "Client created";

/// Render one pair's elementary changes into changelog lines.
///
/// Each change renders as `"One <Noun> <verb>"` when its count is 1 and
/// `"<count> <Noun> entries <verb>"` otherwise. When the number of
/// elementary changes (not their summed counts) exceeds
/// [`CHANGES_COLLAPSE_THRESHOLD`], the individual renderings are discarded
/// in favor of a single `"<N> new changes"` line, where N is the summed
/// occurrence count of the whole set.
///
/// Input order is preserved; callers pass the differ's already-sorted set.
pub fn render_changes(changes: &[ElementaryChange]) -> Vec<String> {
    if changes.len() > CHANGES_COLLAPSE_THRESHOLD {
        let total: usize = changes.iter().map(|c| c.count).sum();
        return vec![format!("{} new changes", total)];
    }
    changes.iter().map(render_change).collect()
}

fn render_change(change: &ElementaryChange) -> String {
    let noun = change.entry.label();
    let verb = change.kind.verb();
    if change.count == 1 {
        format!("One {} {}", noun, verb)
    } else {
        format!("{} {} entries {}", change.count, noun, verb)
    }
}
