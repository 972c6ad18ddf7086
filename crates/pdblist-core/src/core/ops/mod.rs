//! Operations over record lists.
//!
//! - [`select`] - Non-destructive selection copies (by atom name, alpha carbons,
//!   hydrogen stripping). The source list is only read; the result is a new,
//!   independently owned list, or nothing at all if allocation fails.
//! - [`centroid`] - Centres of geometry over a list or a `start..stop` range of
//!   it, skipping records with unknown coordinates.

pub mod centroid;
pub mod select;
