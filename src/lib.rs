//! Energy Audit library
//!
//! This module exposes the calculator and HTTP surface for use in tests
//! and as a library.

pub mod audit;
pub mod core;
pub mod i18n;
pub mod pricing;
pub mod server;
