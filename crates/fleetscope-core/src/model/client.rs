use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client's knowledge base facts, as reported by the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Client's fully qualified domain name
    pub fqdn: Option<String>,
    /// OS family (e.g. "Linux", "Windows")
    pub os: Option<String>,
    pub os_major_version: Option<u32>,
    pub os_minor_version: Option<u32>,
}

/// System information reported by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsInfo {
    pub system: Option<String>,
    pub node: Option<String>,
    pub release: Option<String>,
    pub version: Option<String>,
    pub machine: Option<String>,
    pub kernel: Option<String>,
    pub install_date: Option<DateTime<Utc>>,
    pub libc_version: Option<String>,
    pub architecture: Option<String>,
}

/// Info about the monitoring agent running on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: Option<String>,
    pub version: Option<u64>,
    pub revision: Option<u64>,
    pub build_time: Option<String>,
    pub binary_name: Option<String>,
    pub description: Option<String>,
}

/// A user account on the client, keyed by `username`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Natural key within a snapshot's user set
    pub username: String,
    pub last_logon: Option<DateTime<Utc>>,
    pub full_name: Option<String>,
    pub home_directory: Option<String>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    pub shell: Option<String>,
}

/// Address family of a [`NetworkAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
}

/// A network address owned by an interface, keyed by (`kind`, `address`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAddress {
    pub kind: AddressKind,
    pub address: String,
}

/// A network interface, keyed by (`interface_name`, `mac_address`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub interface_name: String,
    pub mac_address: String,
    pub addresses: Vec<NetworkAddress>,
}

/// A storage volume available to the client, keyed by `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageVolume {
    /// Natural key within a snapshot's volume set
    pub name: String,
    pub device_path: Option<String>,
    pub filesystem_type: Option<String>,
    pub total_size: Option<u64>,
    pub bytes_per_sector: Option<u64>,
    pub free_space: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A label attached to the client, keyed by (`owner`, `name`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientLabel {
    pub owner: String,
    pub name: String,
}

/// Point-in-time record of a monitored client's reported state.
///
/// Snapshots are immutable once constructed. `age` is the capture timestamp
/// of the snapshot; it and the other capture-time metadata fields
/// (`first_seen_at`, `last_seen_at`, `last_booted_at`, `last_clock`) are
/// excluded from diffing and dedup equality, since the agent refreshes them
/// on every check-in even when nothing observable changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    /// Stable host identifier shared by all snapshots of one client
    pub client_id: String,
    /// Capture timestamp of this snapshot
    pub age: DateTime<Utc>,
    pub knowledge_base: KnowledgeBase,
    pub os_info: OsInfo,
    pub agent_info: AgentInfo,
    /// User accounts, keyed by username (unique within a snapshot)
    pub users: Vec<User>,
    /// Network interfaces, keyed by (interface name, MAC address)
    pub interfaces: Vec<NetworkInterface>,
    /// Storage volumes, keyed by name
    pub volumes: Vec<StorageVolume>,
    /// Memory available to the client, in bytes
    pub memory_size: Option<u64>,
    /// Labels attached to the client, keyed by (owner, name)
    pub labels: Vec<ClientLabel>,
    pub first_seen_at: Option<DateTime<Utc>>,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub last_booted_at: Option<DateTime<Utc>>,
    pub last_clock: Option<DateTime<Utc>>,
}

impl ClientSnapshot {
    /// Create an empty snapshot for the given client at the given capture time.
    ///
    /// All reported state starts absent; collections start empty.
    pub fn new(client_id: impl Into<String>, age: DateTime<Utc>) -> Self {
        Self {
            client_id: client_id.into(),
            age,
            knowledge_base: KnowledgeBase::default(),
            os_info: OsInfo::default(),
            agent_info: AgentInfo::default(),
            users: Vec::new(),
            interfaces: Vec::new(),
            volumes: Vec::new(),
            memory_size: None,
            labels: Vec::new(),
            first_seen_at: None,
            last_seen_at: None,
            last_booted_at: None,
            last_clock: None,
        }
    }
}
