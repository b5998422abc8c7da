//! Pure pairwise diff scenarios.
//!
//! All tests operate exclusively on in-memory snapshots (no I/O).

mod common;

use common::{ipv4_interface, snapshot, user};
use fleetscope_core::diff::{diff_snapshots, ChangeKind, ElementaryChange, SnapshotEntry};
use fleetscope_core::model::{AddressKind, ClientLabel, NetworkAddress, StorageVolume, User};

fn change(entry: SnapshotEntry, kind: ChangeKind, count: usize) -> ElementaryChange {
    ElementaryChange { entry, kind, count }
}

// S1: Diff output is deterministic
#[test]
fn test_diff_is_deterministic() {
    let mut older = snapshot(1);
    older.users = vec![user("a"), user("b")];
    let mut newer = snapshot(2);
    newer.users = vec![user("b"), user("c")];
    newer.memory_size = Some(7);

    let diff1 = diff_snapshots(&newer, &older);
    let diff2 = diff_snapshots(&newer, &older);
    assert_eq!(diff1, diff2);
    // Serialized form must also be identical
    let s1 = serde_json::to_string(&diff1).unwrap();
    let s2 = serde_json::to_string(&diff2).unwrap();
    assert_eq!(s1, s2);
}

// S2: Diffing a snapshot against itself → no changes
#[test]
fn test_diff_self_yields_no_changes() {
    let mut s = snapshot(1);
    s.users = vec![user("a")];
    s.interfaces = vec![ipv4_interface("eth0", &["10.0.0.1"])];
    s.volumes = vec![StorageVolume {
        name: "/dev/sda1".to_string(),
        ..StorageVolume::default()
    }];
    s.labels = vec![ClientLabel {
        owner: "admin".to_string(),
        name: "triage".to_string(),
    }];
    assert!(diff_snapshots(&s, &s).is_empty());
}

// S3: Capture-time metadata is non-observable
#[test]
fn test_capture_metadata_never_counts_as_change() {
    let mut older = snapshot(1);
    older.last_seen_at = Some(common::day(1));
    older.last_booted_at = Some(common::day(1));
    let mut newer = snapshot(2);
    newer.last_seen_at = Some(common::day(2));
    newer.last_clock = Some(common::day(2));

    assert!(diff_snapshots(&newer, &older).is_empty());
}

// S4: Simultaneous same-kind changes share one bucket
#[test]
fn test_same_kind_changes_are_counted_not_repeated() {
    let mut older = snapshot(1);
    older.users = vec![user("a"), user("b"), user("c")];
    let mut newer = snapshot(2);
    newer.users = vec![
        User {
            full_name: Some("A".to_string()),
            ..user("a")
        },
        User {
            full_name: Some("B".to_string()),
            ..user("b")
        },
        User {
            full_name: Some("C".to_string()),
            ..user("c")
        },
    ];

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![change(SnapshotEntry::UserFullName, ChangeKind::Added, 3)]
    );
}

// S5: A key present in both sides never becomes an entity-level add/remove
#[test]
fn test_matched_key_is_never_entity_level() {
    let mut older = snapshot(1);
    older.volumes = vec![StorageVolume {
        name: "/dev/sda1".to_string(),
        filesystem_type: Some("ext4".to_string()),
        total_size: Some(1 << 30),
        free_space: Some(1 << 29),
        device_path: Some("/dev/sda1".to_string()),
        ..StorageVolume::default()
    }];
    let mut newer = snapshot(2);
    newer.volumes = vec![StorageVolume {
        name: "/dev/sda1".to_string(),
        filesystem_type: Some("xfs".to_string()),
        total_size: Some(2 << 30),
        free_space: None,
        device_path: Some("/dev/disk/by-label/root".to_string()),
        ..StorageVolume::default()
    }];

    let changes = diff_snapshots(&newer, &older);
    assert!(changes.iter().all(|c| c.entry != SnapshotEntry::Volume));
    assert_eq!(
        changes,
        vec![
            change(SnapshotEntry::VolumeDevicePath, ChangeKind::Updated, 1),
            change(SnapshotEntry::VolumeFilesystemType, ChangeKind::Updated, 1),
            change(SnapshotEntry::VolumeTotalSize, ChangeKind::Updated, 1),
            change(SnapshotEntry::VolumeFreeSpace, ChangeKind::Removed, 1),
        ]
    );
}

// S6: Mixed add and remove across one keyed collection
#[test]
fn test_label_set_delta() {
    let mut older = snapshot(1);
    older.labels = vec![
        ClientLabel {
            owner: "admin".to_string(),
            name: "triage".to_string(),
        },
        ClientLabel {
            owner: "admin".to_string(),
            name: "quarantine".to_string(),
        },
        ClientLabel {
            owner: "bot".to_string(),
            name: "fleet-eu".to_string(),
        },
    ];
    let mut newer = snapshot(2);
    newer.labels = vec![ClientLabel {
        owner: "bot".to_string(),
        name: "fleet-eu".to_string(),
    }];

    // Two surplus old labels, no surplus new: entity-level removal only.
    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![change(SnapshotEntry::Label, ChangeKind::Removed, 2)]
    );
}

// S7: Residual pairing turns a changed key field into an update
#[test]
fn test_residual_pairing_reports_key_field_update() {
    let mut older = snapshot(1);
    older.users = vec![user("alice"), user("stable")];
    let mut newer = snapshot(2);
    newer.users = vec![user("alicia"), user("stable")];

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![change(SnapshotEntry::Username, ChangeKind::Updated, 1)]
    );
}

// S8: Residual pairing leaves genuine surplus as entity-level changes
#[test]
fn test_residual_pairing_surplus_is_entity_level() {
    let mut older = snapshot(1);
    older.interfaces = vec![ipv4_interface("lo", &["1.2.3.4"])];
    let mut newer = snapshot(2);
    newer.interfaces = vec![ipv4_interface("lo", &["1.2.3.40", "127.0.0.1"])];

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![
            change(SnapshotEntry::NetworkAddress, ChangeKind::Added, 1),
            change(SnapshotEntry::IpAddress, ChangeKind::Updated, 1),
        ]
    );
}

// S9: Nested address families diff independently of the owning interface
#[test]
fn test_address_family_change_is_an_address_update() {
    let mut lo_v4 = ipv4_interface("lo", &[]);
    lo_v4.addresses = vec![NetworkAddress {
        kind: AddressKind::Ipv4,
        address: "127.0.0.1".to_string(),
    }];
    let mut lo_v6 = ipv4_interface("lo", &[]);
    lo_v6.addresses = vec![NetworkAddress {
        kind: AddressKind::Ipv6,
        address: "127.0.0.1".to_string(),
    }];

    let mut older = snapshot(1);
    older.interfaces = vec![lo_v4];
    let mut newer = snapshot(2);
    newer.interfaces = vec![lo_v6];

    // Same address value under a different family: the residual pair
    // reports the family change, not an add/remove of the address.
    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![change(SnapshotEntry::AddressType, ChangeKind::Updated, 1)]
    );
}

// S10: Interface removal does not cascade into its addresses
#[test]
fn test_interface_removal_does_not_cascade() {
    let mut older = snapshot(1);
    older.interfaces = vec![ipv4_interface("eth0", &["10.0.0.1", "10.0.0.2"])];
    let newer = snapshot(2);

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![change(
            SnapshotEntry::NetworkInterface,
            ChangeKind::Removed,
            1
        )]
    );
}

// S11: Scalar transitions map onto Added/Removed/Updated
#[test]
fn test_scalar_transitions() {
    let mut older = snapshot(1);
    older.knowledge_base.os = Some("Linux".to_string());
    older.os_info.kernel = Some("5.15.0".to_string());
    let mut newer = snapshot(2);
    newer.knowledge_base.os = Some("Linux".to_string());
    newer.knowledge_base.fqdn = Some("host.example.com".to_string());
    newer.os_info.kernel = Some("6.1.0".to_string());

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![
            change(SnapshotEntry::Fqdn, ChangeKind::Added, 1),
            change(SnapshotEntry::Kernel, ChangeKind::Updated, 1),
        ]
    );
}

// S12: Same entry under several kinds stays in distinct buckets
#[test]
fn test_same_entry_distinct_kinds() {
    let mut older = snapshot(1);
    older.users = vec![
        User {
            shell: Some("/bin/bash".to_string()),
            ..user("a")
        },
        user("b"),
    ];
    let mut newer = snapshot(2);
    newer.users = vec![
        user("a"),
        User {
            shell: Some("/bin/zsh".to_string()),
            ..user("b")
        },
    ];

    assert_eq!(
        diff_snapshots(&newer, &older),
        vec![
            change(SnapshotEntry::UserShell, ChangeKind::Added, 1),
            change(SnapshotEntry::UserShell, ChangeKind::Removed, 1),
        ]
    );
}
