//! Translation from wire structs to the snapshot model.

use crate::api_translation::interfaces::{
    ApiClient, ApiClientLabel, ApiNetworkAddress, ApiNetworkInterface, ApiUser, ApiVolume,
};
use crate::api_translation::primitive::{
    decode_packed_bytes, ipv4_string, ipv6_string, mac_string, parse_micros_timestamp,
    parse_optional_micros, parse_optional_u64,
};
use crate::errors::{ClientHistoryError, Result};
use crate::model::{
    AddressKind, AgentInfo, ClientLabel, ClientSnapshot, KnowledgeBase, NetworkAddress,
    NetworkInterface, OsInfo, StorageVolume, User,
};

/// Deserialize one wire client from raw response bytes.
///
/// # Errors
///
/// Returns `Serialization` when the bytes are not valid JSON for the wire
/// schema. Unknown fields are ignored, not errors.
pub fn parse_api_client(bytes: &[u8]) -> Result<ApiClient> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Translate a wire client into a [`ClientSnapshot`].
///
/// `clientId` and `age` are required; everything else degrades to absence
/// when missing. Addresses whose packed bytes do not match their declared
/// family, and addresses of unknown family, are dropped rather than
/// surfaced as malformed values.
///
/// # Errors
///
/// - `MissingField` — `clientId` or `age` absent or empty
/// - `InvalidTimestamp` — a present timestamp fails to parse
/// - `InvalidNumber` — a present stringified integer fails to parse
pub fn translate_client(api: &ApiClient) -> Result<ClientSnapshot> {
    let client_id = api
        .client_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ClientHistoryError::MissingField { field: "clientId" })?;
    let age_raw = api
        .age
        .as_deref()
        .filter(|age| !age.is_empty())
        .ok_or(ClientHistoryError::MissingField { field: "age" })?;

    let mut snapshot = ClientSnapshot::new(client_id, parse_micros_timestamp(age_raw)?);

    if let Some(kb) = &api.knowledge_base {
        snapshot.knowledge_base = KnowledgeBase {
            fqdn: kb.fqdn.clone(),
            os: kb.os.clone(),
            os_major_version: kb.os_major_version,
            os_minor_version: kb.os_minor_version,
        };
        if let Some(users) = &kb.users {
            snapshot.users = users
                .iter()
                .map(translate_user)
                .collect::<Result<Vec<User>>>()?;
        }
    }

    if let Some(os) = &api.os_info {
        snapshot.os_info = OsInfo {
            system: os.system.clone(),
            node: os.node.clone(),
            release: os.release.clone(),
            version: os.version.clone(),
            machine: os.machine.clone(),
            kernel: os.kernel.clone(),
            install_date: parse_optional_micros(os.install_date.as_deref())?,
            libc_version: os.libc_ver.clone(),
            architecture: os.architecture.clone(),
        };
    }

    if let Some(agent) = &api.agent_info {
        snapshot.agent_info = AgentInfo {
            name: agent.client_name.clone(),
            version: agent.client_version,
            revision: agent.revision,
            build_time: agent.build_time.clone(),
            binary_name: agent.client_binary_name.clone(),
            description: agent.client_description.clone(),
        };
    }

    if let Some(interfaces) = &api.interfaces {
        snapshot.interfaces = interfaces.iter().map(translate_interface).collect();
    }

    if let Some(volumes) = &api.volumes {
        snapshot.volumes = volumes
            .iter()
            .map(translate_volume)
            .collect::<Result<Vec<StorageVolume>>>()?;
    }

    snapshot.memory_size = parse_optional_u64("memorySize", api.memory_size.as_deref())?;

    if let Some(labels) = &api.labels {
        snapshot.labels = labels.iter().map(translate_label).collect();
    }

    snapshot.first_seen_at = parse_optional_micros(api.first_seen_at.as_deref())?;
    snapshot.last_seen_at = parse_optional_micros(api.last_seen_at.as_deref())?;
    snapshot.last_booted_at = parse_optional_micros(api.last_booted_at.as_deref())?;
    snapshot.last_clock = parse_optional_micros(api.last_clock.as_deref())?;

    Ok(snapshot)
}

fn translate_user(api: &ApiUser) -> Result<User> {
    Ok(User {
        username: api.username.clone().unwrap_or_default(),
        last_logon: parse_optional_micros(api.last_logon.as_deref())?,
        full_name: api.full_name.clone(),
        home_directory: api.homedir.clone(),
        uid: api.uid,
        gid: api.gid,
        shell: api.shell.clone(),
    })
}

fn translate_address(api: &ApiNetworkAddress) -> Option<NetworkAddress> {
    let bytes = decode_packed_bytes(api.packed_bytes.as_deref());
    match api.address_type.as_deref() {
        Some("INET") => ipv4_string(&bytes).map(|address| NetworkAddress {
            kind: AddressKind::Ipv4,
            address,
        }),
        Some("INET6") => ipv6_string(&bytes).map(|address| NetworkAddress {
            kind: AddressKind::Ipv6,
            address,
        }),
        _ => None,
    }
}

fn translate_interface(api: &ApiNetworkInterface) -> NetworkInterface {
    let mac_bytes = decode_packed_bytes(api.mac_address.as_deref());
    NetworkInterface {
        interface_name: api.interface_name.clone().unwrap_or_default(),
        mac_address: mac_string(&mac_bytes).unwrap_or_default(),
        addresses: api
            .addresses
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(translate_address)
            .collect(),
    }
}

fn translate_volume(api: &ApiVolume) -> Result<StorageVolume> {
    Ok(StorageVolume {
        name: api.name.clone().unwrap_or_default(),
        device_path: api.device_path.clone(),
        filesystem_type: api.file_system_type.clone(),
        total_size: parse_optional_u64("totalSize", api.total_size.as_deref())?,
        bytes_per_sector: parse_optional_u64("bytesPerSector", api.bytes_per_sector.as_deref())?,
        free_space: parse_optional_u64("freeSpace", api.free_space.as_deref())?,
        created_at: parse_optional_micros(api.creation_time.as_deref())?,
    })
}

fn translate_label(api: &ApiClientLabel) -> ClientLabel {
    ClientLabel {
        owner: api.owner.clone().unwrap_or_default(),
        name: api.name.clone().unwrap_or_default(),
    }
}
