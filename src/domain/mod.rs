//! Domain Layer
//!
//! The organization tree, naming rules and reconciliation policy, with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Organization tree (Organization, OrganizationalUnit, Account)
//! - `value_objects/` - Immutable types (PolicyStackName, StackStatus, ExportedParameters)
//! - `services/` - Creation polling and parameter merging
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
