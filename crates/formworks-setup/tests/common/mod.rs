//! Common test utilities for formworks-setup
//!
//! This module provides shared test infrastructure including:
//! - Scripted actions that record their invocations
//! - A recording mock host (sections, dashboards, access, settings)
//! - A version store with scriptable read and write failures

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mocks;

pub use mocks::*;
