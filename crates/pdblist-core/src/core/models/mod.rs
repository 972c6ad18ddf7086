//! # Core Models Module
//!
//! Data structures that hold the atoms of a structure.
//!
//! ## Key Components
//!
//! - [`atom`] - A single atom record, its fixed-width name token and the
//!   "unknown coordinate" sentinel rule
//! - [`records`] - [`records::RecordList`], the ordered, singly-linked list of records
//! - [`strings`] - [`strings::StringList`], the same list shape over owned strings
//! - [`linked`] - The owned node chain both lists are built on, and its allocation error
//! - [`ids`] - Handle types for nodes of each list
//!
//! ## Ownership
//!
//! Every list owns a private arena of nodes. Nothing is shared between lists:
//! copying records from one list to another always allocates fresh nodes, and
//! dropping a list releases all of its nodes.
//!
//! ```
//! # use nalgebra::Point3;
//! use pdblist::core::models::{atom::Record, records::RecordList};
//!
//! # fn main() -> Result<(), pdblist::core::models::atom::AtomNameError> {
//! let list: RecordList = vec![
//!     Record::named("N", Point3::new(0.0, 0.0, 0.0))?,
//!     Record::named("CA", Point3::new(1.5, 0.0, 0.0))?,
//! ]
//! .into_iter()
//! .collect();
//!
//! let copy = list.clone();
//! assert_eq!(copy, list);
//! assert!(!list.contains(copy.head().unwrap()));
//! # Ok(())
//! # }
//! ```

pub mod atom;
pub mod ids;
pub mod linked;
pub mod records;
pub mod strings;
