//! Catalog-wide properties of validation and resolution.
//!
//! These run every combination of dimension and load type in the embedded catalog
//! rather than a handful of fixtures.

use pxc_core::catalog::{
    CONNECTIONS_FAMILY, CPU_FAMILY, Catalog, DIMENSION_FAMILY, Entry, LOAD_TYPE_FAMILY, LoadType,
};
use pxc_core::configurator::ValueSource;
use pxc_core::{
    CalculatorError, ConfigurationRequest, Configurator, MessageKind, ResolutionError,
    ValidationError, calculate,
};

fn body(dimension: u32, load_type: u32, connections: u32) -> Vec<u8> {
    serde_json::to_vec(&ConfigurationRequest::new(dimension, load_type, connections))
        .expect("request serializes")
}

fn every_pair(catalog: &Catalog) -> Vec<(u32, u32)> {
    let dimensions: Vec<u32> = catalog.dimensions().map(|d| d.id).collect();
    let load_types: Vec<u32> = catalog.load_types().map(|l| l.id).collect();
    dimensions
        .iter()
        .flat_map(|d| load_types.iter().map(move |l| (*d, *l)))
        .collect()
}

#[test]
fn test_every_valid_pair_resolves_one_value_per_resource_family() {
    let catalog = Catalog::build();
    let resource_names: Vec<&str> = catalog
        .resource_families()
        .map(|f| f.name.as_str())
        .collect();

    for (dimension, load_type) in every_pair(&catalog) {
        for connections in [0, 1, 50, 10_000, u32::MAX] {
            let calculation = calculate(&catalog, &body(dimension, load_type, connections))
                .unwrap_or_else(|e| panic!("{}/{} failed: {}", dimension, load_type, e));

            let answer = &calculation.answer;
            let names: Vec<&str> = answer.families.keys().map(String::as_str).collect();
            assert_eq!(names, resource_names);
            assert_eq!(answer.value(CONNECTIONS_FAMILY), Some(u64::from(connections)));
            assert_eq!(answer.connections, connections);
            assert_eq!(calculation.message.kind, MessageKind::Ok);
        }
    }
}

#[test]
fn test_zero_ids_never_reach_the_configurator() {
    let catalog = Catalog::build();
    for (dimension, load_type) in [(0, 1), (1, 0), (0, 0)] {
        let err = calculate(&catalog, &body(dimension, load_type, 10)).unwrap_err();
        assert!(err.is_malformed_request(), "{:?}", err);
        assert!(matches!(
            err,
            CalculatorError::Validation(
                ValidationError::MissingDimension { .. } | ValidationError::MissingLoadType { .. }
            )
        ));
    }
}

#[test]
fn test_absent_ids_are_reported_not_defaulted() {
    let catalog = Catalog::build();
    let max_dimension = catalog.dimensions().map(|d| d.id).max().unwrap_or(0);
    let max_load_type = catalog.load_types().map(|l| l.id).max().unwrap_or(0);

    let err = calculate(&catalog, &body(max_dimension + 1, 1, 10)).unwrap_err();
    assert_eq!(
        err,
        CalculatorError::Resolution(ResolutionError::UnknownDimension {
            id: max_dimension + 1
        })
    );

    let err = calculate(&catalog, &body(1, max_load_type + 1, 10)).unwrap_err();
    assert_eq!(
        err,
        CalculatorError::Resolution(ResolutionError::UnknownLoadType {
            id: max_load_type + 1
        })
    );
}

#[test]
fn test_repeated_processing_is_identical() {
    let catalog = Catalog::build();
    for (dimension, load_type) in every_pair(&catalog) {
        let mut configurator = Configurator::new();
        configurator.init(ConfigurationRequest::new(dimension, load_type, 25), &catalog);
        let first = configurator.process_request().expect("resolves");
        let second = configurator.process_request().expect("resolves");
        assert_eq!(first, second);
    }
}

#[test]
fn test_supported_output_feeds_back_into_calculation() {
    let catalog = Catalog::build();
    let listing = serde_json::to_value(catalog.list_all()).expect("catalog serializes");

    let ids = |family: &str| -> Vec<u32> {
        listing[family]["entries"]
            .as_object()
            .expect("entries object")
            .keys()
            .map(|k| k.parse().expect("numeric id"))
            .collect()
    };

    let dimensions = ids(DIMENSION_FAMILY);
    let load_types = ids(LOAD_TYPE_FAMILY);
    assert!(!dimensions.is_empty());
    assert!(!load_types.is_empty());

    for dimension in &dimensions {
        for load_type in &load_types {
            assert!(calculate(&catalog, &body(*dimension, *load_type, 1)).is_ok());
        }
    }
}

#[test]
fn test_embedded_overrides_are_reported_as_overrides() {
    let catalog = Catalog::build();
    for load_type in catalog.load_types() {
        for dimension in catalog.dimensions() {
            let answer = calculate(&catalog, &body(dimension.id, load_type.id, 1))
                .expect("resolves")
                .answer;
            for (family, value) in &load_type.overrides {
                let resolved = &answer.families[family];
                assert_eq!(resolved.value, *value);
                assert_eq!(resolved.source, ValueSource::Override);
            }
        }
    }
}

/// The embedded catalog plus a load type that both scales and overrides `cpu` and
/// `connections`.
fn catalog_with_conflicting_profile(id: u32) -> Catalog {
    let full = Catalog::build();
    let mut load_types = full
        .family(LOAD_TYPE_FAMILY)
        .cloned()
        .expect("embedded load types");
    load_types.insert(Entry::LoadType(LoadType {
        id,
        name: "Conflicting".to_string(),
        description: "Scales and overrides the same families".to_string(),
        multipliers: [(CPU_FAMILY.to_string(), 2.0), (CONNECTIONS_FAMILY.to_string(), 4.0)]
            .into_iter()
            .collect(),
        overrides: [(CPU_FAMILY.to_string(), 42), (CONNECTIONS_FAMILY.to_string(), 7)]
            .into_iter()
            .collect(),
    }));
    Catalog::from_families(full.families().cloned().chain([load_types]))
}

#[test]
fn test_override_beats_multiplier_for_every_dimension() {
    let catalog = catalog_with_conflicting_profile(99);
    let dimensions: Vec<u32> = catalog.dimensions().map(|d| d.id).collect();

    for dimension in dimensions {
        let answer = calculate(&catalog, &body(dimension, 99, 33))
            .expect("resolves")
            .answer;

        let cpu = &answer.families[CPU_FAMILY];
        assert_eq!(cpu.value, 42, "dimension {}", dimension);
        assert_eq!(cpu.source, ValueSource::Override);

        let connections = &answer.families[CONNECTIONS_FAMILY];
        assert_eq!(connections.value, 33, "dimension {}", dimension);
        assert_eq!(connections.source, ValueSource::Requested);
    }
}
