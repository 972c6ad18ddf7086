//! # Core Module
//!
//! The record store and the operations built on it.
//!
//! ## Architecture
//!
//! - **Record Storage** ([`models`]) - Atom records, the singly-linked lists that own
//!   them, and the string list sharing the same shape
//! - **Operations** ([`ops`]) - Selection copies and centroid calculations
//! - **Configuration** ([`config`]) - Selection sets loaded from TOML or built in code
//!
//! ## Key Guarantees
//!
//! - **Non-destructive** - Operations never modify the list they read
//! - **Disjoint ownership** - A copied list never shares nodes with its source
//! - **All-or-nothing allocation** - A copy that runs out of room is released
//!   in full and reported as an error
//! - **Order preservation** - Copies keep the source order of records

pub mod config;
pub mod models;
pub mod ops;
