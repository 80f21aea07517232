//! Resolving a request against the catalog.
//!
//! A [`Configurator`] starts uninitialized, becomes ready once [`Configurator::init`]
//! binds a validated request and a catalog, and from then on produces the same
//! [`Calculation`] on every call to [`Configurator::process_request`].
//!
//! # Merge Policy
//!
//! For every resource family, given dimension `D` and load type `L`:
//!
//! 1. `connections` takes the requested count as-is; the tier's catalog value is kept as
//!    `recommended`.
//! 2. An override in `L` for the family replaces the base value.
//! 3. Otherwise the base value for `D` is scaled by `L`'s multiplier (1.0 if absent) and
//!    rounded to the nearest integer.
//!
//! # Example
//!
//! ```
//! use pxc_core::catalog::{Catalog, CONNECTIONS_FAMILY, CPU_FAMILY};
//! use pxc_core::configurator::Configurator;
//! use pxc_core::request::ConfigurationRequest;
//!
//! let catalog = Catalog::build();
//! let mut configurator = Configurator::new();
//! configurator.init(ConfigurationRequest::new(3, 3, 50), &catalog);
//!
//! let calculation = configurator.process_request().unwrap();
//! assert_eq!(calculation.answer.value(CONNECTIONS_FAMILY), Some(50));
//! assert_eq!(calculation.answer.value(CPU_FAMILY), Some(5000));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CONNECTIONS_FAMILY, Catalog, Dimension, Family, LoadType};
use crate::error::{CalculatorResult, ResolutionError};
use crate::message::{DefaultTemplates, MessageKind, MessageTemplates, ResponseMessage};
use crate::request::ConfigurationRequest;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Base value scaled by the load type multiplier.
    Computed,
    /// Explicit load type override.
    Override,
    /// Taken from the request.
    Requested,
}

/// One resolved value per resource family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
    /// The resolved value.
    pub value: u64,
    /// Unit of the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// How the value was obtained.
    pub source: ValueSource,
    /// The catalog's own value when the request supplied the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<u64>,
}

/// The id and name of a selected catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Entry id.
    pub id: u32,
    /// Entry name.
    pub name: String,
}

/// The merged configuration for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAnswer {
    /// The selected tier.
    pub dimension: Selection,
    /// The selected profile.
    #[serde(rename = "loadtype")]
    pub load_type: Selection,
    /// The requested connection count.
    pub connections: u32,
    /// Family name -> resolved value.
    pub families: BTreeMap<String, ResolvedValue>,
}

impl ResolvedAnswer {
    /// Returns the resolved value for `family`.
    pub fn value(&self, family: &str) -> Option<u64> {
        self.families.get(family).map(|v| v.value)
    }
}

/// The answer together with its status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Status message (always kind OK).
    pub message: ResponseMessage,
    /// The resolved answer.
    pub answer: ResolvedAnswer,
}

#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    request: ConfigurationRequest,
    catalog: &'a Catalog,
}

/// Resolves a validated request against a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Configurator<'a> {
    context: Option<Context<'a>>,
}

impl<'a> Configurator<'a> {
    /// Creates an uninitialized configurator.
    pub fn new() -> Self {
        Self { context: None }
    }

    /// Binds the request and catalog to calculate against.
    pub fn init(&mut self, request: ConfigurationRequest, catalog: &'a Catalog) {
        self.context = Some(Context { request, catalog });
    }

    /// Returns true once [`init`](Self::init) has been called.
    pub fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    /// Returns the bound request.
    pub fn request(&self) -> Option<&ConfigurationRequest> {
        self.context.as_ref().map(|c| &c.request)
    }

    /// Calculates the configuration using the default message templates.
    ///
    /// # Errors
    ///
    /// See [`process_request_with`](Self::process_request_with).
    pub fn process_request(&self) -> CalculatorResult<Calculation> {
        self.process_request_with(&DefaultTemplates)
    }

    /// Calculates the configuration, rendering the status message through `templates`.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::NotInitialized`] before [`init`](Self::init)
    /// - [`ResolutionError::UnknownDimension`] / [`ResolutionError::UnknownLoadType`]
    ///   when an id has no catalog entry
    /// - [`ResolutionError::MissingBaseValue`] when a resource family lacks the tier
    pub fn process_request_with(
        &self,
        templates: &dyn MessageTemplates,
    ) -> CalculatorResult<Calculation> {
        let Context { request, catalog } = self.context.ok_or(ResolutionError::NotInitialized)?;

        let dimension = catalog
            .dimension(request.dimension.id)
            .ok_or(ResolutionError::UnknownDimension {
                id: request.dimension.id,
            })?;
        let load_type = catalog
            .load_type(request.load_type.id)
            .ok_or(ResolutionError::UnknownLoadType {
                id: request.load_type.id,
            })?;

        debug!(
            dimension = %dimension.name,
            load_type = %load_type.name,
            connections = request.connections,
            "Resolving configuration"
        );

        let families = catalog
            .resource_families()
            .map(|family| {
                resolve_family(family, dimension, load_type, request.connections)
                    .map(|value| (family.name.clone(), value))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let summary = format!(
            "{} / {} with {} connections",
            dimension.name, load_type.name, request.connections
        );
        let message = ResponseMessage::render(templates, MessageKind::Ok, Some(&summary));

        Ok(Calculation {
            message,
            answer: ResolvedAnswer {
                dimension: Selection {
                    id: dimension.id,
                    name: dimension.name.clone(),
                },
                load_type: Selection {
                    id: load_type.id,
                    name: load_type.name.clone(),
                },
                connections: request.connections,
                families,
            },
        })
    }
}

/// Merges one family's base value with the load type profile.
fn resolve_family(
    family: &Family,
    dimension: &Dimension,
    load_type: &LoadType,
    connections: u32,
) -> Result<ResolvedValue, ResolutionError> {
    let base = family
        .base_value(dimension.id)
        .ok_or_else(|| ResolutionError::MissingBaseValue {
            family: family.name.clone(),
            dimension: dimension.id,
        })?;

    let (value, source, recommended) = if family.name == CONNECTIONS_FAMILY {
        (u64::from(connections), ValueSource::Requested, Some(base))
    } else if let Some(value) = load_type.override_for(&family.name) {
        (value, ValueSource::Override, None)
    } else {
        let factor = load_type.multiplier(&family.name);
        (scale(base, factor), ValueSource::Computed, None)
    };

    Ok(ResolvedValue {
        value,
        unit: family.unit.clone(),
        source,
        recommended,
    })
}

fn scale(base: u64, factor: f64) -> u64 {
    (base as f64 * factor).round() as u64
}
