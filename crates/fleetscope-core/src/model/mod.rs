//! Client snapshot data model.

mod client;

pub use client::{
    AddressKind, AgentInfo, ClientLabel, ClientSnapshot, KnowledgeBase, NetworkAddress,
    NetworkInterface, OsInfo, StorageVolume, User,
};
