//! Snapshot diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! `SnapshotEntry` and `ChangeKind` derive `Ord`; their variant order is the
//! emission order of the diff and is part of the public contract.

use serde::{Deserialize, Serialize};

use crate::model::ClientSnapshot;

/// A diffable entry of the client snapshot.
///
/// Each variant identifies one comparable field group: either a scalar
/// attribute (possibly nested in an info block or a keyed sub-entity) or a
/// keyed sub-entity collection itself. The variant order defines the fixed
/// priority in which changes are emitted: identity, knowledge base, OS info,
/// agent info, users, network interfaces and addresses, volumes, memory,
/// labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SnapshotEntry {
    // Identity
    ClientId,

    // Knowledge base
    Fqdn,
    Os,
    OsMajorVersion,
    OsMinorVersion,

    // OS info
    System,
    OsNode,
    OsRelease,
    OsVersion,
    Machine,
    Kernel,
    OsInstallDate,
    LibcVersion,
    Architecture,

    // Agent info
    AgentName,
    AgentVersion,
    AgentRevision,
    AgentBuildTime,
    AgentBinaryName,
    AgentDescription,

    // Users
    User,
    Username,
    UserLastLogon,
    UserFullName,
    UserHomeDirectory,
    UserUid,
    UserGid,
    UserShell,

    // Network interfaces and their addresses
    NetworkInterface,
    InterfaceName,
    MacAddress,
    NetworkAddress,
    AddressType,
    IpAddress,

    // Storage volumes
    Volume,
    VolumeName,
    VolumeDevicePath,
    VolumeFilesystemType,
    VolumeTotalSize,
    VolumeBytesPerSector,
    VolumeFreeSpace,
    VolumeCreationTime,

    // Memory
    MemorySize,

    // Labels
    Label,
    LabelOwner,
    LabelName,
}

impl SnapshotEntry {
    /// Human-readable noun for this entry, as rendered in changelog lines.
    pub fn label(&self) -> &'static str {
        match self {
            SnapshotEntry::ClientId => "Client ID",
            SnapshotEntry::Fqdn => "FQDN",
            SnapshotEntry::Os => "OS",
            SnapshotEntry::OsMajorVersion => "OS major version",
            SnapshotEntry::OsMinorVersion => "OS minor version",
            SnapshotEntry::System => "System type",
            SnapshotEntry::OsNode => "OS node name",
            SnapshotEntry::OsRelease => "OS release",
            SnapshotEntry::OsVersion => "OS version",
            SnapshotEntry::Machine => "Machine type",
            SnapshotEntry::Kernel => "Kernel version",
            SnapshotEntry::OsInstallDate => "OS install date",
            SnapshotEntry::LibcVersion => "Libc version",
            SnapshotEntry::Architecture => "Architecture",
            SnapshotEntry::AgentName => "Agent name",
            SnapshotEntry::AgentVersion => "Agent version",
            SnapshotEntry::AgentRevision => "Agent revision",
            SnapshotEntry::AgentBuildTime => "Agent build time",
            SnapshotEntry::AgentBinaryName => "Agent binary name",
            SnapshotEntry::AgentDescription => "Agent description",
            SnapshotEntry::User => "User",
            SnapshotEntry::Username => "Username",
            SnapshotEntry::UserLastLogon => "User last logon",
            SnapshotEntry::UserFullName => "User full name",
            SnapshotEntry::UserHomeDirectory => "User home directory",
            SnapshotEntry::UserUid => "User UID",
            SnapshotEntry::UserGid => "User GID",
            SnapshotEntry::UserShell => "User shell",
            SnapshotEntry::NetworkInterface => "Network interface",
            SnapshotEntry::InterfaceName => "Interface name",
            SnapshotEntry::MacAddress => "MAC address",
            SnapshotEntry::NetworkAddress => "Network address",
            SnapshotEntry::AddressType => "Address type",
            SnapshotEntry::IpAddress => "IP address",
            SnapshotEntry::Volume => "Volume",
            SnapshotEntry::VolumeName => "Volume name",
            SnapshotEntry::VolumeDevicePath => "Volume device path",
            SnapshotEntry::VolumeFilesystemType => "Volume filesystem type",
            SnapshotEntry::VolumeTotalSize => "Volume size",
            SnapshotEntry::VolumeBytesPerSector => "Volume bytes per sector",
            SnapshotEntry::VolumeFreeSpace => "Volume free space",
            SnapshotEntry::VolumeCreationTime => "Volume creation time",
            SnapshotEntry::MemorySize => "Memory size",
            SnapshotEntry::Label => "Label",
            SnapshotEntry::LabelOwner => "Label owner",
            SnapshotEntry::LabelName => "Label name",
        }
    }
}

/// Kind of a detected change.
///
/// The variant order (Added, Removed, Updated) is the tie-break order for
/// changes of the same entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
}

impl ChangeKind {
    /// Verb rendered in changelog lines. Removals render as "deleted".
    pub fn verb(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "deleted",
            ChangeKind::Updated => "updated",
        }
    }
}

/// One detected difference between two snapshots.
///
/// `count` is the number of occurrences of this exact (entry, kind) pair
/// within one pairwise diff: three users gaining a full name in one step
/// yield a single `ElementaryChange` with count 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementaryChange {
    pub entry: SnapshotEntry,
    pub kind: ChangeKind,
    pub count: usize,
}

/// A retained snapshot paired with its rendered changelog entries.
///
/// Produced fresh per pipeline invocation and never mutated. The oldest
/// retained snapshot always carries the literal `["Client created"]`; every
/// other entry's `changes` list is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientVersion {
    pub client: ClientSnapshot,
    pub changes: Vec<String>,
}
