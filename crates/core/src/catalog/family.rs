//! Families and their entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A resource tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Unique, non-zero identifier.
    pub id: u32,
    /// Tier name (e.g., "Medium").
    pub name: String,
    /// Base CPU allotment in millicores.
    pub cpu: u64,
    /// Base memory allotment in MiB.
    pub memory: u64,
}

/// An access-pattern profile.
///
/// Multipliers scale a dimension's base value for the named family; overrides
/// replace it outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadType {
    /// Unique, non-zero identifier.
    pub id: u32,
    /// Profile name (e.g., "Heavy OLTP").
    pub name: String,
    /// What kind of workload the profile describes.
    pub description: String,
    /// Family name -> multiplier applied to the base value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub multipliers: BTreeMap<String, f64>,
    /// Family name -> explicit value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, u64>,
}

impl LoadType {
    /// Returns the multiplier for `family`, 1.0 when the profile leaves it alone.
    pub fn multiplier(&self, family: &str) -> f64 {
        self.multipliers.get(family).copied().unwrap_or(1.0)
    }

    /// Returns the explicit override for `family`, if any.
    pub fn override_for(&self, family: &str) -> Option<u64> {
        self.overrides.get(family).copied()
    }
}

/// A base value of a resource family for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// The dimension id this value belongs to.
    pub id: u32,
    /// The base value, in the family's unit.
    pub value: u64,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// An entry of the `dimension` family.
    Dimension(Dimension),
    /// An entry of the `loadtype` family.
    LoadType(LoadType),
    /// An entry of a resource family.
    Parameter(Parameter),
}

impl Entry {
    /// Returns the entry id.
    pub fn id(&self) -> u32 {
        match self {
            Entry::Dimension(d) => d.id,
            Entry::LoadType(l) => l.id,
            Entry::Parameter(p) => p.id,
        }
    }

    /// Returns the dimension if this is a dimension entry.
    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Entry::Dimension(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the load type if this is a load type entry.
    pub fn as_load_type(&self) -> Option<&LoadType> {
        match self {
            Entry::LoadType(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the parameter if this is a resource family entry.
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Entry::Parameter(p) => Some(p),
            _ => None,
        }
    }
}

/// What a family describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    /// Resource tiers.
    Dimension,
    /// Access-pattern profiles.
    LoadType,
    /// A resource axis resolved per request.
    Resource,
}

/// A named group of entries for one axis, ordered by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Family name; also its key in the catalog.
    pub name: String,
    /// What the family holds.
    pub kind: FamilyKind,
    /// Human-readable description.
    pub description: String,
    /// Unit of the values (resource families only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Entries keyed by id.
    pub entries: BTreeMap<u32, Entry>,
}

impl Family {
    /// Creates an empty family.
    pub fn new(
        name: impl Into<String>,
        kind: FamilyKind,
        description: impl Into<String>,
        unit: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            unit: unit.map(str::to_string),
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry under its own id, replacing any previous one.
    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.id(), entry);
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Returns the base value stored for `dimension_id` in a resource family.
    pub fn base_value(&self, dimension_id: u32) -> Option<u64> {
        self.get(dimension_id)
            .and_then(Entry::as_parameter)
            .map(|p| p.value)
    }

    /// Returns the entry ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the family has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true for families resolved per request.
    pub fn is_resource(&self) -> bool {
        self.kind == FamilyKind::Resource
    }
}
