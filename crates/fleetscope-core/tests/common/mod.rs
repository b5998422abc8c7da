use chrono::{DateTime, TimeZone, Utc};
use fleetscope_core::model::{
    AddressKind, ClientSnapshot, NetworkAddress, NetworkInterface, User,
};

/// Capture timestamp on the given day of February 2020
#[allow(dead_code)]
pub fn day(day_of_month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 2, day_of_month, 0, 0, 0).unwrap()
}

/// Create an empty test snapshot for client C.1234 captured on the given day
#[allow(dead_code)]
pub fn snapshot(day_of_month: u32) -> ClientSnapshot {
    ClientSnapshot::new("C.1234", day(day_of_month))
}

/// Create a user with only its username set
#[allow(dead_code)]
pub fn user(username: &str) -> User {
    User {
        username: username.to_string(),
        ..User::default()
    }
}

/// Create a user with a full name
#[allow(dead_code)]
pub fn named_user(username: &str, full_name: &str) -> User {
    User {
        username: username.to_string(),
        full_name: Some(full_name.to_string()),
        ..User::default()
    }
}

/// Create a user with a home directory
#[allow(dead_code)]
pub fn homed_user(username: &str, home_directory: &str) -> User {
    User {
        username: username.to_string(),
        home_directory: Some(home_directory.to_string()),
        ..User::default()
    }
}

/// Create an interface with the given name and IPv4 address values
#[allow(dead_code)]
pub fn ipv4_interface(interface_name: &str, addresses: &[&str]) -> NetworkInterface {
    NetworkInterface {
        interface_name: interface_name.to_string(),
        mac_address: String::new(),
        addresses: addresses
            .iter()
            .map(|address| NetworkAddress {
                kind: AddressKind::Ipv4,
                address: address.to_string(),
            })
            .collect(),
    }
}
