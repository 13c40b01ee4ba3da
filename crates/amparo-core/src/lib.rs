//! # amparo-core
//!
//! Core types for the Amparo vocational-support registry.
//!
//! This crate provides the foundational types shared across all Amparo crates:
//! - Entity structs for the seven collection record types, plus their `New*`
//!   draft counterparts (pre-persist records without an id)
//! - Fixed value sets as typed enums serializing to the collection's exact
//!   label strings
//! - The authenticated staff identity
//! - The trial-evaluation question catalog
//! - Form-level validation helpers

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod identity;
pub mod validate;
