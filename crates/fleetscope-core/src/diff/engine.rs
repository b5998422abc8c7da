//! Pairwise structural diff of client snapshots.
//!
//! The core entry point is [`diff_snapshots`], which compares a newer and an
//! older snapshot of the same client and produces the ordered set of
//! [`ElementaryChange`]s describing how the older state became the newer.
//!
//! The differ is total: it never fails, treats absent optional fields as
//! "no value", and ignores capture-time metadata (`age`, `first_seen_at`,
//! `last_seen_at`, `last_booted_at`, `last_clock`).

use std::collections::BTreeMap;

use crate::diff::model::{ChangeKind, ElementaryChange, SnapshotEntry};
use crate::model::{
    ClientLabel, ClientSnapshot, NetworkAddress, NetworkInterface, StorageVolume, User,
};

/// Accumulates (entry, kind) occurrence counts for one pairwise diff.
///
/// Backed by a `BTreeMap` so that draining yields the contractual emission
/// order: entry priority first, then Added < Removed < Updated.
#[derive(Debug, Default)]
struct ChangeAccumulator {
    buckets: BTreeMap<(SnapshotEntry, ChangeKind), usize>,
}

impl ChangeAccumulator {
    fn record(&mut self, entry: SnapshotEntry, kind: ChangeKind) {
        self.record_n(entry, kind, 1);
    }

    fn record_n(&mut self, entry: SnapshotEntry, kind: ChangeKind, occurrences: usize) {
        if occurrences > 0 {
            *self.buckets.entry((entry, kind)).or_insert(0) += occurrences;
        }
    }

    fn into_changes(self) -> Vec<ElementaryChange> {
        self.buckets
            .into_iter()
            .map(|((entry, kind), count)| ElementaryChange { entry, kind, count })
            .collect()
    }
}

/// Diff an optional scalar field: absence is "no value", not an error.
fn diff_option<T: PartialEq>(
    acc: &mut ChangeAccumulator,
    entry: SnapshotEntry,
    older: Option<&T>,
    newer: Option<&T>,
) {
    match (older, newer) {
        (None, Some(_)) => acc.record(entry, ChangeKind::Added),
        (Some(_), None) => acc.record(entry, ChangeKind::Removed),
        (Some(o), Some(n)) if o != n => acc.record(entry, ChangeKind::Updated),
        _ => {}
    }
}

/// Diff a required scalar field; only ever yields Updated.
fn diff_value<T: PartialEq + ?Sized>(
    acc: &mut ChangeAccumulator,
    entry: SnapshotEntry,
    older: &T,
    newer: &T,
) {
    if older != newer {
        acc.record(entry, ChangeKind::Updated);
    }
}

/// Diff a keyed collection.
///
/// Entries whose key appears on both sides are recursively field-diffed and
/// never reported as entity-level added/removed. Surplus entries from both
/// sides are then residually paired in key order and field-diffed as updates
/// of one another; only the unmatched remainder becomes one entity-level
/// Added and/or Removed change, counting the surplus keys.
fn diff_keyed<T, K, F, D>(
    acc: &mut ChangeAccumulator,
    entity: SnapshotEntry,
    older: &[T],
    newer: &[T],
    key: F,
    mut diff_entry: D,
) where
    K: Ord,
    F: Fn(&T) -> K,
    D: FnMut(&mut ChangeAccumulator, &T, &T),
{
    let old_by_key: BTreeMap<K, &T> = older.iter().map(|e| (key(e), e)).collect();
    let new_by_key: BTreeMap<K, &T> = newer.iter().map(|e| (key(e), e)).collect();

    let mut old_only: Vec<&T> = Vec::new();
    for (k, o) in &old_by_key {
        match new_by_key.get(k) {
            Some(n) => diff_entry(acc, o, n),
            None => old_only.push(*o),
        }
    }
    let new_only: Vec<&T> = new_by_key
        .iter()
        .filter(|(k, _)| !old_by_key.contains_key(k))
        .map(|(_, n)| *n)
        .collect();

    let paired = old_only.len().min(new_only.len());
    for i in 0..paired {
        diff_entry(acc, old_only[i], new_only[i]);
    }
    acc.record_n(entity, ChangeKind::Added, new_only.len() - paired);
    acc.record_n(entity, ChangeKind::Removed, old_only.len() - paired);
}

fn diff_user(acc: &mut ChangeAccumulator, older: &User, newer: &User) {
    diff_value(acc, SnapshotEntry::Username, &older.username, &newer.username);
    diff_option(
        acc,
        SnapshotEntry::UserLastLogon,
        older.last_logon.as_ref(),
        newer.last_logon.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::UserFullName,
        older.full_name.as_ref(),
        newer.full_name.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::UserHomeDirectory,
        older.home_directory.as_ref(),
        newer.home_directory.as_ref(),
    );
    diff_option(acc, SnapshotEntry::UserUid, older.uid.as_ref(), newer.uid.as_ref());
    diff_option(acc, SnapshotEntry::UserGid, older.gid.as_ref(), newer.gid.as_ref());
    diff_option(
        acc,
        SnapshotEntry::UserShell,
        older.shell.as_ref(),
        newer.shell.as_ref(),
    );
}

fn diff_address(acc: &mut ChangeAccumulator, older: &NetworkAddress, newer: &NetworkAddress) {
    diff_value(acc, SnapshotEntry::AddressType, &older.kind, &newer.kind);
    diff_value(acc, SnapshotEntry::IpAddress, &older.address, &newer.address);
}

fn diff_interface(
    acc: &mut ChangeAccumulator,
    older: &NetworkInterface,
    newer: &NetworkInterface,
) {
    diff_value(
        acc,
        SnapshotEntry::InterfaceName,
        &older.interface_name,
        &newer.interface_name,
    );
    diff_value(
        acc,
        SnapshotEntry::MacAddress,
        &older.mac_address,
        &newer.mac_address,
    );
    diff_keyed(
        acc,
        SnapshotEntry::NetworkAddress,
        &older.addresses,
        &newer.addresses,
        |a| (a.kind, a.address.clone()),
        diff_address,
    );
}

fn diff_volume(acc: &mut ChangeAccumulator, older: &StorageVolume, newer: &StorageVolume) {
    diff_value(acc, SnapshotEntry::VolumeName, &older.name, &newer.name);
    diff_option(
        acc,
        SnapshotEntry::VolumeDevicePath,
        older.device_path.as_ref(),
        newer.device_path.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::VolumeFilesystemType,
        older.filesystem_type.as_ref(),
        newer.filesystem_type.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::VolumeTotalSize,
        older.total_size.as_ref(),
        newer.total_size.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::VolumeBytesPerSector,
        older.bytes_per_sector.as_ref(),
        newer.bytes_per_sector.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::VolumeFreeSpace,
        older.free_space.as_ref(),
        newer.free_space.as_ref(),
    );
    diff_option(
        acc,
        SnapshotEntry::VolumeCreationTime,
        older.created_at.as_ref(),
        newer.created_at.as_ref(),
    );
}

fn diff_label(acc: &mut ChangeAccumulator, older: &ClientLabel, newer: &ClientLabel) {
    diff_value(acc, SnapshotEntry::LabelOwner, &older.owner, &newer.owner);
    diff_value(acc, SnapshotEntry::LabelName, &older.name, &newer.name);
}

/// Compute the ordered set of elementary changes between two snapshots of
/// the same client.
///
/// `newer` and `older` may be any two well-formed snapshots; the differ
/// never fails. Diffing a snapshot against itself yields an empty set.
/// Output is sorted by (entry priority, kind) and is deterministic for a
/// given input pair regardless of collection ordering within the snapshots.
pub fn diff_snapshots(newer: &ClientSnapshot, older: &ClientSnapshot) -> Vec<ElementaryChange> {
    let mut acc = ChangeAccumulator::default();

    diff_value(
        &mut acc,
        SnapshotEntry::ClientId,
        &older.client_id,
        &newer.client_id,
    );

    let (okb, nkb) = (&older.knowledge_base, &newer.knowledge_base);
    diff_option(&mut acc, SnapshotEntry::Fqdn, okb.fqdn.as_ref(), nkb.fqdn.as_ref());
    diff_option(&mut acc, SnapshotEntry::Os, okb.os.as_ref(), nkb.os.as_ref());
    diff_option(
        &mut acc,
        SnapshotEntry::OsMajorVersion,
        okb.os_major_version.as_ref(),
        nkb.os_major_version.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::OsMinorVersion,
        okb.os_minor_version.as_ref(),
        nkb.os_minor_version.as_ref(),
    );

    let (oos, nos) = (&older.os_info, &newer.os_info);
    diff_option(&mut acc, SnapshotEntry::System, oos.system.as_ref(), nos.system.as_ref());
    diff_option(&mut acc, SnapshotEntry::OsNode, oos.node.as_ref(), nos.node.as_ref());
    diff_option(
        &mut acc,
        SnapshotEntry::OsRelease,
        oos.release.as_ref(),
        nos.release.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::OsVersion,
        oos.version.as_ref(),
        nos.version.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::Machine,
        oos.machine.as_ref(),
        nos.machine.as_ref(),
    );
    diff_option(&mut acc, SnapshotEntry::Kernel, oos.kernel.as_ref(), nos.kernel.as_ref());
    diff_option(
        &mut acc,
        SnapshotEntry::OsInstallDate,
        oos.install_date.as_ref(),
        nos.install_date.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::LibcVersion,
        oos.libc_version.as_ref(),
        nos.libc_version.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::Architecture,
        oos.architecture.as_ref(),
        nos.architecture.as_ref(),
    );

    let (oag, nag) = (&older.agent_info, &newer.agent_info);
    diff_option(&mut acc, SnapshotEntry::AgentName, oag.name.as_ref(), nag.name.as_ref());
    diff_option(
        &mut acc,
        SnapshotEntry::AgentVersion,
        oag.version.as_ref(),
        nag.version.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::AgentRevision,
        oag.revision.as_ref(),
        nag.revision.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::AgentBuildTime,
        oag.build_time.as_ref(),
        nag.build_time.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::AgentBinaryName,
        oag.binary_name.as_ref(),
        nag.binary_name.as_ref(),
    );
    diff_option(
        &mut acc,
        SnapshotEntry::AgentDescription,
        oag.description.as_ref(),
        nag.description.as_ref(),
    );

    diff_keyed(
        &mut acc,
        SnapshotEntry::User,
        &older.users,
        &newer.users,
        |u| u.username.clone(),
        diff_user,
    );

    diff_keyed(
        &mut acc,
        SnapshotEntry::NetworkInterface,
        &older.interfaces,
        &newer.interfaces,
        |i| (i.interface_name.clone(), i.mac_address.clone()),
        diff_interface,
    );

    diff_keyed(
        &mut acc,
        SnapshotEntry::Volume,
        &older.volumes,
        &newer.volumes,
        |v| v.name.clone(),
        diff_volume,
    );

    diff_option(
        &mut acc,
        SnapshotEntry::MemorySize,
        older.memory_size.as_ref(),
        newer.memory_size.as_ref(),
    );

    diff_keyed(
        &mut acc,
        SnapshotEntry::Label,
        &older.labels,
        &newer.labels,
        |l| (l.owner.clone(), l.name.clone()),
        diff_label,
    );

    acc.into_changes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AddressKind;
    use chrono::{TimeZone, Utc};

    fn snapshot(day: u32) -> ClientSnapshot {
        ClientSnapshot::new("C.1234", Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap())
    }

    fn user(username: &str) -> User {
        User {
            username: username.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn test_self_diff_is_empty() {
        let mut s = snapshot(1);
        s.users.push(user("alice"));
        s.memory_size = Some(1024);
        assert!(diff_snapshots(&s, &s).is_empty());
    }

    #[test]
    fn test_capture_metadata_is_ignored() {
        let mut older = snapshot(1);
        let mut newer = snapshot(2);
        older.last_seen_at = Some(older.age);
        newer.last_seen_at = Some(newer.age);
        newer.last_clock = Some(newer.age);
        assert!(diff_snapshots(&newer, &older).is_empty());
    }

    #[test]
    fn test_optional_scalar_added_removed_updated() {
        let older = snapshot(1);
        let mut newer = snapshot(2);
        newer.memory_size = Some(123);

        assert_eq!(
            diff_snapshots(&newer, &older),
            vec![ElementaryChange {
                entry: SnapshotEntry::MemorySize,
                kind: ChangeKind::Added,
                count: 1,
            }]
        );
        assert_eq!(
            diff_snapshots(&older, &newer),
            vec![ElementaryChange {
                entry: SnapshotEntry::MemorySize,
                kind: ChangeKind::Removed,
                count: 1,
            }]
        );

        let mut updated = newer.clone();
        updated.memory_size = Some(456);
        assert_eq!(
            diff_snapshots(&updated, &newer),
            vec![ElementaryChange {
                entry: SnapshotEntry::MemorySize,
                kind: ChangeKind::Updated,
                count: 1,
            }]
        );
    }

    #[test]
    fn test_keyed_adds_are_bucketed_with_counts() {
        let older = snapshot(1);
        let mut newer = snapshot(2);
        newer.users = vec![user("a"), user("b"), user("c")];

        assert_eq!(
            diff_snapshots(&newer, &older),
            vec![ElementaryChange {
                entry: SnapshotEntry::User,
                kind: ChangeKind::Added,
                count: 3,
            }]
        );
    }

    #[test]
    fn test_key_in_both_sides_is_never_entity_level() {
        let mut older = snapshot(1);
        let mut newer = snapshot(2);
        older.users = vec![user("alice")];
        newer.users = vec![User {
            username: "alice".to_string(),
            full_name: Some("Alice".to_string()),
            home_directory: Some("/home/alice".to_string()),
            shell: Some("/bin/zsh".to_string()),
            uid: Some(1000),
            ..User::default()
        }];

        let changes = diff_snapshots(&newer, &older);
        assert!(changes
            .iter()
            .all(|c| c.entry != SnapshotEntry::User));
        assert!(changes
            .iter()
            .all(|c| c.kind == ChangeKind::Added));
        assert_eq!(changes.len(), 4);
    }

    #[test]
    fn test_collection_order_does_not_matter() {
        let mut older = snapshot(1);
        let mut newer = snapshot(2);
        older.users = vec![user("a"), user("b")];
        newer.users = vec![user("b"), user("a")];
        assert!(diff_snapshots(&newer, &older).is_empty());
    }

    #[test]
    fn test_residual_pairing_reports_update_not_add_remove() {
        let lo = |address: &str| NetworkInterface {
            interface_name: "lo".to_string(),
            mac_address: String::new(),
            addresses: vec![NetworkAddress {
                kind: AddressKind::Ipv4,
                address: address.to_string(),
            }],
        };
        let mut older = snapshot(1);
        let mut newer = snapshot(2);
        older.interfaces = vec![lo("1.2.3.4")];
        newer.interfaces = vec![lo("1.2.3.40")];

        assert_eq!(
            diff_snapshots(&newer, &older),
            vec![ElementaryChange {
                entry: SnapshotEntry::IpAddress,
                kind: ChangeKind::Updated,
                count: 1,
            }]
        );
    }

    #[test]
    fn test_entity_add_does_not_cascade_into_nested_addresses() {
        let older = snapshot(1);
        let mut newer = snapshot(2);
        newer.interfaces = vec![NetworkInterface {
            interface_name: "eth0".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
            addresses: vec![
                NetworkAddress {
                    kind: AddressKind::Ipv4,
                    address: "10.0.0.1".to_string(),
                },
                NetworkAddress {
                    kind: AddressKind::Ipv6,
                    address: "FE80:0000:0000:0000:0000:0000:0000:0001".to_string(),
                },
            ],
        }];

        assert_eq!(
            diff_snapshots(&newer, &older),
            vec![ElementaryChange {
                entry: SnapshotEntry::NetworkInterface,
                kind: ChangeKind::Added,
                count: 1,
            }]
        );
    }

    #[test]
    fn test_output_is_sorted_by_entry_then_kind() {
        let mut older = snapshot(1);
        let mut newer = snapshot(2);
        older.users = vec![user("gone")];
        newer.labels = vec![ClientLabel {
            owner: "admin".to_string(),
            name: "triage".to_string(),
        }];
        newer.memory_size = Some(1);
        newer.knowledge_base.fqdn = Some("host.example.com".to_string());

        let changes = diff_snapshots(&newer, &older);
        let entries: Vec<SnapshotEntry> = changes.iter().map(|c| c.entry).collect();
        assert_eq!(
            entries,
            vec![
                SnapshotEntry::Fqdn,
                SnapshotEntry::User,
                SnapshotEntry::MemorySize,
                SnapshotEntry::Label,
            ]
        );
    }
}
