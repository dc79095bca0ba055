//! Plugin composition contracts.
//!
//! This module defines the extension-point catalog, the contract plugin
//! authors implement, the process-lifetime registry, and the slot resolver
//! used at render time.

pub mod catalog;
pub mod contract;
pub mod registry;
pub mod slot;
