//! Typed wire structs for the console API's client representation.
//!
//! Field presence is never guaranteed on the wire, so every field is
//! optional here; `translate_client` decides what is required. Timestamps
//! travel as microsecond epoch strings, 64-bit integers as strings, and
//! MAC/IP addresses as base64-packed byte blobs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKnowledgeBase {
    pub fqdn: Option<String>,
    pub os: Option<String>,
    pub os_major_version: Option<u32>,
    pub os_minor_version: Option<u32>,
    pub users: Option<Vec<ApiUser>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiUser {
    pub username: Option<String>,
    /// Microseconds since epoch, stringified
    pub last_logon: Option<String>,
    pub full_name: Option<String>,
    pub homedir: Option<String>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    pub shell: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiOsInfo {
    pub system: Option<String>,
    pub node: Option<String>,
    pub release: Option<String>,
    pub version: Option<String>,
    pub machine: Option<String>,
    pub kernel: Option<String>,
    /// Microseconds since epoch, stringified
    pub install_date: Option<String>,
    pub libc_ver: Option<String>,
    pub architecture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiAgentInfo {
    pub client_name: Option<String>,
    pub client_version: Option<u64>,
    pub revision: Option<u64>,
    pub build_time: Option<String>,
    pub client_binary_name: Option<String>,
    pub client_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiNetworkAddress {
    /// "INET" for IPv4, "INET6" for IPv6
    pub address_type: Option<String>,
    /// Base64-encoded packed address bytes (4 for IPv4, 16 for IPv6)
    pub packed_bytes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiNetworkInterface {
    pub interface_name: Option<String>,
    /// Base64-encoded packed MAC bytes (6 bytes)
    pub mac_address: Option<String>,
    pub addresses: Option<Vec<ApiNetworkAddress>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiVolume {
    pub name: Option<String>,
    pub device_path: Option<String>,
    pub file_system_type: Option<String>,
    /// Bytes, stringified
    pub total_size: Option<String>,
    /// Bytes, stringified
    pub bytes_per_sector: Option<String>,
    /// Bytes, stringified
    pub free_space: Option<String>,
    /// Microseconds since epoch, stringified
    pub creation_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiClientLabel {
    pub owner: Option<String>,
    pub name: Option<String>,
}

/// One snapshot of a client as delivered by the console API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiClient {
    pub client_id: Option<String>,
    /// Capture timestamp, microseconds since epoch, stringified
    pub age: Option<String>,
    pub agent_info: Option<ApiAgentInfo>,
    pub knowledge_base: Option<ApiKnowledgeBase>,
    pub os_info: Option<ApiOsInfo>,
    pub interfaces: Option<Vec<ApiNetworkInterface>>,
    pub volumes: Option<Vec<ApiVolume>>,
    /// Bytes, stringified
    pub memory_size: Option<String>,
    pub first_seen_at: Option<String>,
    pub last_seen_at: Option<String>,
    pub last_booted_at: Option<String>,
    pub last_clock: Option<String>,
    pub labels: Option<Vec<ApiClientLabel>>,
}
