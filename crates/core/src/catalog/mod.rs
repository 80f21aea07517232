//! The sizing catalog.
//!
//! The catalog is the system's static knowledge base: a mapping from family name to a
//! [`Family`], each holding entries ordered by id. It is built from embedded definitions,
//! never fails, and is never mutated once built.
//!
//! # Families
//!
//! | Family | Kind | Entries keyed by |
//! |--------|------|------------------|
//! | `dimension` | dimension | tier id |
//! | `loadtype` | loadtype | profile id |
//! | `cpu`, `memory`, `connections`, `innodb_buffer_pool`, `innodb_log_file`, `table_open_cache`, `thread_pool`, `gcache` | resource | tier id |
//!
//! # Sharing
//!
//! Build the catalog once at startup and share it read-only, either by wrapping it in an
//! `Arc` or through [`Catalog::shared`].
//!
//! # Example
//!
//! ```
//! use pxc_core::catalog::{Catalog, DIMENSION_FAMILY};
//!
//! let catalog = Catalog::build();
//! let medium = catalog.dimension(3).unwrap();
//! assert_eq!(medium.name, "Medium");
//! assert!(catalog.lookup(DIMENSION_FAMILY, 0).is_none());
//! ```

mod definitions;
pub mod family;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use family::{Dimension, Entry, Family, FamilyKind, LoadType, Parameter};

/// Name of the resource-tier family.
pub const DIMENSION_FAMILY: &str = "dimension";
/// Name of the access-pattern family.
pub const LOAD_TYPE_FAMILY: &str = "loadtype";
/// CPU per node, in millicores.
pub const CPU_FAMILY: &str = "cpu";
/// Memory per node, in MiB.
pub const MEMORY_FAMILY: &str = "memory";
/// Client connections; resolved from the request rather than the catalog.
pub const CONNECTIONS_FAMILY: &str = "connections";
/// InnoDB buffer pool, in MiB.
pub const INNODB_BUFFER_POOL_FAMILY: &str = "innodb_buffer_pool";
/// InnoDB redo log, in MiB.
pub const INNODB_LOG_FILE_FAMILY: &str = "innodb_log_file";
/// Open table cache size.
pub const TABLE_OPEN_CACHE_FAMILY: &str = "table_open_cache";
/// Connection thread pool size.
pub const THREAD_POOL_FAMILY: &str = "thread_pool";
/// Galera gcache, in MiB.
pub const GCACHE_FAMILY: &str = "gcache";

static SHARED: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// The full set of families, keyed by family name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    families: BTreeMap<String, Family>,
}

impl Catalog {
    /// Builds the catalog from the embedded definitions.
    pub fn build() -> Self {
        Self::from_families(definitions::build_families())
    }

    /// Builds a catalog from arbitrary families.
    ///
    /// A later family with the same name replaces an earlier one.
    pub fn from_families(families: impl IntoIterator<Item = Family>) -> Self {
        let families = families
            .into_iter()
            .map(|family| (family.name.clone(), family))
            .collect();
        Self { families }
    }

    /// Returns the process-wide catalog, built on first use.
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    /// Returns the whole catalog, for the supported-options read path.
    pub fn list_all(&self) -> &Self {
        self
    }

    /// Looks up an entry by family name and id.
    ///
    /// Returns `None` when either the family or the id is absent.
    pub fn lookup(&self, family: &str, id: u32) -> Option<&Entry> {
        self.families.get(family).and_then(|f| f.get(id))
    }

    /// Returns the named family.
    pub fn family(&self, name: &str) -> Option<&Family> {
        self.families.get(name)
    }

    /// Returns all families in name order.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    /// Returns the family names in order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Returns the families resolved per request (everything except dimension and load type).
    pub fn resource_families(&self) -> impl Iterator<Item = &Family> {
        self.families.values().filter(|f| f.is_resource())
    }

    /// Looks up a dimension by id.
    pub fn dimension(&self, id: u32) -> Option<&Dimension> {
        self.lookup(DIMENSION_FAMILY, id)
            .and_then(Entry::as_dimension)
    }

    /// Looks up a load type by id.
    pub fn load_type(&self, id: u32) -> Option<&LoadType> {
        self.lookup(LOAD_TYPE_FAMILY, id)
            .and_then(Entry::as_load_type)
    }

    /// Returns all dimensions ordered by id.
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.family(DIMENSION_FAMILY)
            .into_iter()
            .flat_map(|f| f.entries.values())
            .filter_map(Entry::as_dimension)
    }

    /// Returns all load types ordered by id.
    pub fn load_types(&self) -> impl Iterator<Item = &LoadType> {
        self.family(LOAD_TYPE_FAMILY)
            .into_iter()
            .flat_map(|f| f.entries.values())
            .filter_map(Entry::as_load_type)
    }

    /// Returns the number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns true if the catalog has no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_has_all_families() {
        let catalog = Catalog::build();
        let names: Vec<&str> = catalog.family_names().collect();
        assert_eq!(
            names,
            vec![
                CONNECTIONS_FAMILY,
                CPU_FAMILY,
                DIMENSION_FAMILY,
                GCACHE_FAMILY,
                INNODB_BUFFER_POOL_FAMILY,
                INNODB_LOG_FILE_FAMILY,
                LOAD_TYPE_FAMILY,
                MEMORY_FAMILY,
                TABLE_OPEN_CACHE_FAMILY,
                THREAD_POOL_FAMILY,
            ]
        );
        assert_eq!(catalog.resource_families().count(), 8);
    }

    #[test]
    fn test_lookup_found_and_missing() {
        let catalog = Catalog::build();
        assert_eq!(
            catalog.lookup(DIMENSION_FAMILY, 3).map(Entry::id),
            Some(3)
        );
        assert!(catalog.lookup(DIMENSION_FAMILY, 99).is_none());
        assert!(catalog.lookup("no-such-family", 1).is_none());
    }

    #[test]
    fn test_typed_lookups() {
        let catalog = Catalog::build();
        assert_eq!(catalog.dimension(1).map(|d| d.cpu), Some(1000));
        assert_eq!(
            catalog.load_type(3).map(|l| l.name.as_str()),
            Some("Heavy OLTP")
        );
        assert!(catalog.dimension(0).is_none());
        // Ids resolve only within their own family.
        assert!(catalog.load_type(6).is_none());
    }

    #[test]
    fn test_dimensions_ordered_by_id() {
        let catalog = Catalog::build();
        let ids: Vec<u32> = catalog.dimensions().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let ids: Vec<u32> = catalog.load_types().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_resource_families_cover_every_dimension() {
        let catalog = Catalog::build();
        for family in catalog.resource_families() {
            for dimension in catalog.dimensions() {
                assert!(
                    family.base_value(dimension.id).is_some(),
                    "{} has no value for dimension {}",
                    family.name,
                    dimension.id
                );
            }
        }
    }

    #[test]
    fn test_shared_matches_build() {
        assert_eq!(Catalog::shared(), &Catalog::build());
        assert!(std::ptr::eq(Catalog::shared(), Catalog::shared()));
    }

    #[test]
    fn test_serialized_shape() {
        let catalog = Catalog::build();
        let json = serde_json::to_value(catalog.list_all()).unwrap();
        assert_eq!(json["dimension"]["entries"]["3"]["name"], "Medium");
        assert_eq!(json["loadtype"]["kind"], "loadtype");
        assert_eq!(json["cpu"]["unit"], "millicores");
        assert_eq!(json["memory"]["entries"]["1"]["value"], 2048);
        assert!(json["dimension"].get("unit").is_none());
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let catalog = Catalog::build();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
