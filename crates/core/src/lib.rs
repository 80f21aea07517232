//! # pxc-core - Sizing Core for Percona XtraDB Cluster
//!
//! This crate turns a workload description into a recommended cluster configuration.
//! A request names a resource tier ("dimension"), an access-pattern profile
//! ("load type"), and an expected connection count; the answer is one resolved value per
//! resource family (CPU, memory, connections, buffer pool, redo log, caches, ...).
//!
//! ## Architecture
//!
//! - [`catalog`] - The static set of families, keyed by name and ordered by id
//! - [`request`] - The caller's sizing request
//! - [`validator`] - Completeness checks on raw request bodies
//! - [`configurator`] - Merging a validated request against the catalog
//! - [`message`] - Status messages and their text templates
//! - [`error`] - Error types for every stage
//!
//! ## Flow
//!
//! ```text
//! raw body ──▶ validator::validate ──▶ Configurator::init ──▶ process_request ──▶ Calculation
//!                   │                                               │
//!                   └──────── ValidationError ◀── ResolutionError ──┘
//! ```
//!
//! Nothing here performs I/O or blocks; a request either resolves synchronously or fails
//! with a [`CalculatorError`] that renders into a [`ResponseMessage`].
//!
//! ## Quick Start
//!
//! ```
//! use pxc_core::{Catalog, Configurator, validator};
//!
//! let catalog = Catalog::build();
//! let request = validator::validate(
//!     br#"{"dimension":{"id":3},"loadtype":{"id":2},"connections":50}"#,
//! )?;
//!
//! let mut configurator = Configurator::new();
//! configurator.init(request, &catalog);
//! let calculation = configurator.process_request()?;
//!
//! assert!(calculation.message.is_ok());
//! assert_eq!(calculation.answer.value("memory"), Some(8192));
//! # Ok::<(), pxc_core::CalculatorError>(())
//! ```

// Enforce documentation
#![warn(missing_docs)]

pub mod catalog;
pub mod configurator;
pub mod error;
pub mod message;
pub mod request;
pub mod validator;

// Re-export commonly used types
pub use catalog::Catalog;
pub use configurator::{Calculation, Configurator, ResolvedAnswer};
pub use error::{CalculatorError, CalculatorResult, ResolutionError, ValidationError};
pub use message::{DefaultTemplates, MessageKind, MessageTemplates, ResponseMessage};
pub use request::ConfigurationRequest;

/// Validates a raw body and resolves it against `catalog` in one step.
///
/// # Errors
///
/// Returns the first validation or resolution error encountered.
pub fn calculate(catalog: &Catalog, body: &[u8]) -> CalculatorResult<Calculation> {
    let request = validator::validate(body)?;
    let mut configurator = Configurator::new();
    configurator.init(request, catalog);
    configurator.process_request()
}
