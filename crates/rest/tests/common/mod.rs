//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server construction
//! - [`assertions`] - Envelope and response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
