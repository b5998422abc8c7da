//! Wire-format translation for the console API.
//!
//! The console delivers snapshot history as JSON with camelCase keys,
//! microseconds-since-epoch string timestamps, stringified 64-bit integers,
//! and base64-packed address bytes. This module owns the typed wire structs
//! ([`interfaces`]) and their translation into the [`crate::model`] types
//! the diffing pipeline consumes.
//!
//! Translation is the only fallible boundary of the crate: structurally
//! invalid required data (client id, capture timestamp, unparseable
//! numbers) errors, while malformed *optional* data degrades to absence so
//! the pipeline downstream stays total.

pub mod client;
pub mod interfaces;
pub mod primitive;

pub use client::{parse_api_client, translate_client};
pub use interfaces::ApiClient;
