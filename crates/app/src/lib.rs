//! Shared application domain modules for the storefront backend.

pub mod domain;
