//! Embedded catalog definitions.
//!
//! Tiers, load profiles, and resource families are compiled into the binary;
//! [`build_families`] turns them into [`Family`] values.

use std::collections::BTreeMap;

use super::family::{Dimension, Entry, Family, FamilyKind, LoadType, Parameter};
use super::{
    CONNECTIONS_FAMILY, CPU_FAMILY, DIMENSION_FAMILY, GCACHE_FAMILY, INNODB_BUFFER_POOL_FAMILY,
    INNODB_LOG_FILE_FAMILY, LOAD_TYPE_FAMILY, MEMORY_FAMILY, TABLE_OPEN_CACHE_FAMILY,
    THREAD_POOL_FAMILY,
};

struct TierDefinition {
    id: u32,
    name: &'static str,
    cpu: u64,
    memory: u64,
    connections: u64,
    log_file: u64,
    table_open_cache: u64,
    gcache: u64,
}

const TIERS: [TierDefinition; 6] = [
    TierDefinition {
        id: 1,
        name: "XSmall",
        cpu: 1000,
        memory: 2048,
        connections: 100,
        log_file: 128,
        table_open_cache: 1000,
        gcache: 256,
    },
    TierDefinition {
        id: 2,
        name: "Small",
        cpu: 2000,
        memory: 4096,
        connections: 200,
        log_file: 256,
        table_open_cache: 2000,
        gcache: 512,
    },
    TierDefinition {
        id: 3,
        name: "Medium",
        cpu: 4000,
        memory: 8192,
        connections: 400,
        log_file: 512,
        table_open_cache: 4000,
        gcache: 1024,
    },
    TierDefinition {
        id: 4,
        name: "Large",
        cpu: 8000,
        memory: 16384,
        connections: 800,
        log_file: 1024,
        table_open_cache: 8000,
        gcache: 2048,
    },
    TierDefinition {
        id: 5,
        name: "XLarge",
        cpu: 16000,
        memory: 32768,
        connections: 1600,
        log_file: 2048,
        table_open_cache: 16000,
        gcache: 4096,
    },
    TierDefinition {
        id: 6,
        name: "XXLarge",
        cpu: 32000,
        memory: 65536,
        connections: 3200,
        log_file: 4096,
        table_open_cache: 32000,
        gcache: 8192,
    },
];

struct LoadProfileDefinition {
    id: u32,
    name: &'static str,
    description: &'static str,
    multipliers: &'static [(&'static str, f64)],
    overrides: &'static [(&'static str, u64)],
}

const LOAD_PROFILES: [LoadProfileDefinition; 3] = [
    LoadProfileDefinition {
        id: 1,
        name: "Mainly Reads",
        description: "Read-heavy traffic with occasional writes",
        multipliers: &[
            (INNODB_BUFFER_POOL_FAMILY, 1.10),
            (INNODB_LOG_FILE_FAMILY, 0.50),
            (TABLE_OPEN_CACHE_FAMILY, 1.50),
        ],
        overrides: &[(GCACHE_FAMILY, 128)],
    },
    LoadProfileDefinition {
        id: 2,
        name: "Light OLTP",
        description: "Balanced transactional traffic",
        multipliers: &[],
        overrides: &[],
    },
    LoadProfileDefinition {
        id: 3,
        name: "Heavy OLTP",
        description: "Write-heavy transactional traffic",
        multipliers: &[
            (CPU_FAMILY, 1.25),
            (INNODB_BUFFER_POOL_FAMILY, 0.90),
            (INNODB_LOG_FILE_FAMILY, 2.00),
            (GCACHE_FAMILY, 2.00),
            (THREAD_POOL_FAMILY, 1.50),
        ],
        overrides: &[],
    },
];

struct ResourceDefinition {
    name: &'static str,
    description: &'static str,
    unit: &'static str,
    base: fn(&TierDefinition) -> u64,
}

fn tier_cpu(tier: &TierDefinition) -> u64 {
    tier.cpu
}

fn tier_memory(tier: &TierDefinition) -> u64 {
    tier.memory
}

fn tier_connections(tier: &TierDefinition) -> u64 {
    tier.connections
}

// 65% of the tier memory goes to the buffer pool.
fn tier_buffer_pool(tier: &TierDefinition) -> u64 {
    tier.memory * 65 / 100
}

fn tier_log_file(tier: &TierDefinition) -> u64 {
    tier.log_file
}

fn tier_table_open_cache(tier: &TierDefinition) -> u64 {
    tier.table_open_cache
}

fn tier_thread_pool(tier: &TierDefinition) -> u64 {
    (tier.cpu / 1000).max(1)
}

fn tier_gcache(tier: &TierDefinition) -> u64 {
    tier.gcache
}

const RESOURCES: [ResourceDefinition; 8] = [
    ResourceDefinition {
        name: CPU_FAMILY,
        description: "CPU request per cluster node",
        unit: "millicores",
        base: tier_cpu,
    },
    ResourceDefinition {
        name: MEMORY_FAMILY,
        description: "Memory request per cluster node",
        unit: "MiB",
        base: tier_memory,
    },
    ResourceDefinition {
        name: CONNECTIONS_FAMILY,
        description: "Client connections (max_connections)",
        unit: "connections",
        base: tier_connections,
    },
    ResourceDefinition {
        name: INNODB_BUFFER_POOL_FAMILY,
        description: "InnoDB buffer pool size (innodb_buffer_pool_size)",
        unit: "MiB",
        base: tier_buffer_pool,
    },
    ResourceDefinition {
        name: INNODB_LOG_FILE_FAMILY,
        description: "InnoDB redo log size (innodb_log_file_size)",
        unit: "MiB",
        base: tier_log_file,
    },
    ResourceDefinition {
        name: TABLE_OPEN_CACHE_FAMILY,
        description: "Open table cache (table_open_cache)",
        unit: "tables",
        base: tier_table_open_cache,
    },
    ResourceDefinition {
        name: THREAD_POOL_FAMILY,
        description: "Connection thread pool (thread_pool_size)",
        unit: "threads",
        base: tier_thread_pool,
    },
    ResourceDefinition {
        name: GCACHE_FAMILY,
        description: "Galera write-set cache (gcache.size)",
        unit: "MiB",
        base: tier_gcache,
    },
];

fn dimension_family() -> Family {
    let mut family = Family::new(
        DIMENSION_FAMILY,
        FamilyKind::Dimension,
        "Resource tiers driving base resource values",
        None,
    );
    for tier in &TIERS {
        family.insert(Entry::Dimension(Dimension {
            id: tier.id,
            name: tier.name.to_string(),
            cpu: tier.cpu,
            memory: tier.memory,
        }));
    }
    family
}

fn load_type_family() -> Family {
    let mut family = Family::new(
        LOAD_TYPE_FAMILY,
        FamilyKind::LoadType,
        "Access-pattern profiles applied to base resource values",
        None,
    );
    for profile in &LOAD_PROFILES {
        let multipliers: BTreeMap<String, f64> = profile
            .multipliers
            .iter()
            .map(|(name, factor)| (name.to_string(), *factor))
            .collect();
        let overrides: BTreeMap<String, u64> = profile
            .overrides
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();

        family.insert(Entry::LoadType(LoadType {
            id: profile.id,
            name: profile.name.to_string(),
            description: profile.description.to_string(),
            multipliers,
            overrides,
        }));
    }
    family
}

fn resource_family(definition: &ResourceDefinition) -> Family {
    let mut family = Family::new(
        definition.name,
        FamilyKind::Resource,
        definition.description,
        Some(definition.unit),
    );
    for tier in &TIERS {
        family.insert(Entry::Parameter(Parameter {
            id: tier.id,
            value: (definition.base)(tier),
        }));
    }
    family
}

/// Builds every embedded family.
pub(super) fn build_families() -> Vec<Family> {
    let mut families = vec![dimension_family(), load_type_family()];
    families.extend(RESOURCES.iter().map(resource_family));
    families
}
