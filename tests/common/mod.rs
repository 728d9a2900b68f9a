//! Common test utilities for orgov scenario tests.
//!
//! This module provides:
//! - `FakeOrganization`: in-memory directory with asynchronous account creation
//! - `FakeCloud`: in-memory object store and per-account stacks
//! - `World`: a temp workspace wiring the real use cases to the fakes

#![allow(dead_code)]

pub mod directory;

pub use cloud::*;
pub use directory::*;
pub use world::*;
