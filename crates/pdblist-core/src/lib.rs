//! # pdblist
//!
//! Owned, singly-linked lists of atom records for macromolecular structures,
//! and the operations that traverse them.
//!
//! - [`core::ops::select`] builds a new, independently owned list holding only
//!   the records whose atom name is in a selection set. The source list is never
//!   touched, and a copy that fails to allocate leaves nothing behind.
//! - [`core::ops::centroid`] computes the centre of geometry of any contiguous
//!   range of a list (typically one residue), skipping records whose
//!   coordinates are marked unknown.
//!
//! Parsing and writing structure files is left to the caller: a
//! [`core::models::records::RecordList`] is built from already-parsed
//! [`core::models::atom::Record`]s.
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod core;
