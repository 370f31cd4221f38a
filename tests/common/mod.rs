//! Shared fixtures for integration tests.

#![allow(dead_code)]

use cloudscan::domain::instance::Instance;
use cloudscan::{DefinedTags, FreeformTags};

fn base_instance(
    name: &str,
    hostname: &str,
    ip: &str,
    ocid_suffix: &str,
    subnet: &str,
    env: &str,
) -> Instance {
    Instance {
        display_name: name.to_string(),
        hostname: hostname.to_string(),
        primary_ip: ip.to_string(),
        image_name: "Oracle Linux 8".to_string(),
        image_os: "Oracle Linux".to_string(),
        shape: "VM.Standard3.Flex".to_string(),
        ocid: format!("ocid1.instance.oc1..{ocid_suffix}"),
        state: "RUNNING".to_string(),
        vcn_name: "production-vcn".to_string(),
        subnet_name: subnet.to_string(),
        security_list_names: vec!["default-security-list".to_string()],
        nsg_names: vec![format!("{subnet}-nsg")],
        freeform_tags: FreeformTags::from([("env".to_string(), env.to_string())]),
        defined_tags: DefinedTags::new(),
    }
}

/// A small mixed fleet with stable positions:
///
/// 0. `web-frontend-01`  10.0.1.11
/// 1. `web-frontend-02`  10.0.1.12
/// 2. `db-primary-01`    10.0.2.21  (tagged `team:platform`)
/// 3. `cache-node-01`    10.0.3.31
/// 4. `batch-worker-01`  10.0.3.32
pub fn fleet() -> Vec<Instance> {
    let mut instances = vec![
        base_instance(
            "web-frontend-01",
            "webfe01",
            "10.0.1.11",
            "aaaa1111",
            "web-subnet",
            "prod",
        ),
        base_instance(
            "web-frontend-02",
            "webfe02",
            "10.0.1.12",
            "bbbb2222",
            "web-subnet",
            "prod",
        ),
        base_instance(
            "db-primary-01",
            "dbp01",
            "10.0.2.21",
            "cccc3333",
            "db-subnet",
            "prod",
        ),
        base_instance(
            "cache-node-01",
            "cache01",
            "10.0.3.31",
            "dddd4444",
            "cache-subnet",
            "dev",
        ),
        base_instance(
            "batch-worker-01",
            "batch01",
            "10.0.3.32",
            "eeee5555",
            "batch-subnet",
            "dev",
        ),
    ];
    instances[2]
        .freeform_tags
        .insert("team".to_string(), "platform".to_string());
    instances
}

/// `count` instances named `node-000`, `node-001`, ... in order.
pub fn numbered_fleet(count: usize) -> Vec<Instance> {
    (0..count)
        .map(|i| {
            base_instance(
                &format!("node-{i:03}"),
                &format!("node{i:03}"),
                &format!("10.1.{}.{}", i / 250, i % 250),
                &format!("node{i:08}"),
                "worker-subnet",
                "prod",
            )
        })
        .collect()
}
