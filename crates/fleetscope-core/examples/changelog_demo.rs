//! Changelog Pipeline Demonstration
//!
//! This example demonstrates the client-history pipeline end to end.
//!
//! Key concepts illustrated:
//! 1. Wire-format translation (console API JSON -> snapshot model)
//! 2. Deduplication of re-transmitted snapshots
//! 3. Human-readable changelog rendering
//! 4. Collapse of change bursts into an aggregate line

use fleetscope_core::api_translation::{parse_api_client, translate_client};
use fleetscope_core::diff::compute_client_versions;
use fleetscope_core::logging_facility::{init, Profile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== Fleetscope Changelog Demo ===\n");

    // Four check-ins, oldest first. The second is an exact re-transmission
    // of the first; the last one changes several fields at once.
    let raw_history = [
        r#"{"clientId": "C.1234", "age": "1580601600000000"}"#,
        r#"{"clientId": "C.1234", "age": "1580688000000000"}"#,
        r#"{"clientId": "C.1234", "age": "1580774400000000",
            "knowledgeBase": {"users": [{"username": "alice"}, {"username": "bob"}]}}"#,
        r#"{"clientId": "C.1234", "age": "1580860800000000",
            "knowledgeBase": {"fqdn": "host.example.com",
                              "users": [{"username": "alice"}, {"username": "bob"}]},
            "osInfo": {"system": "Linux", "kernel": "5.15.0"},
            "memorySize": "17179869184"}"#,
    ];

    let mut snapshots = Vec::new();
    for raw in raw_history.iter().rev() {
        // newest-first, as the API delivers
        let api = parse_api_client(raw.as_bytes())?;
        snapshots.push(translate_client(&api)?);
    }
    println!("Translated {} snapshots", snapshots.len());

    let versions = compute_client_versions(&snapshots);
    println!(
        "Retained {} versions after deduplication\n",
        versions.len()
    );

    println!("## Timeline (newest first)\n");
    for version in &versions {
        println!("{}", version.client.age.format("%Y-%m-%d %H:%M"));
        for change in &version.changes {
            println!("  - {}", change);
        }
    }

    Ok(())
}
