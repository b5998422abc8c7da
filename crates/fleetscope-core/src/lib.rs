//! Fleetscope Core - Client-history diffing engine
//!
//! This crate provides the history engine behind the fleet console's client
//! timeline view, including:
//! - Typed client snapshot model (knowledge base, OS info, agent info,
//!   users, network interfaces, volumes, labels)
//! - Snapshot deduplication over the observable field set
//! - Deterministic structural diffing of snapshot pairs
//! - Human-readable changelog rendering with collapse-to-summary
//! - Wire-format translation from the console API's JSON representation
//!
//! The engine is a pure library: it consumes a newest-first snapshot list
//! and returns values. Fetching, caching, and presentation live elsewhere.

pub mod api_translation;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{
    client_entries_changed, compute_client_versions, dedup_snapshots, diff_snapshots,
    ChangeKind, ClientVersion, ElementaryChange, SnapshotEntry,
};
pub use errors::{ClientHistoryError, ExError, ExErrorKind, Result};
pub use model::ClientSnapshot;
