//! Inventory record management over the stockpile sequence contract.
//!
//! Two layers:
//!
//! - [`Series`] / [`Table`]: thin 1D/2D views over any
//!   [`Sequence`](stockpile_collections::Sequence) backing, modeling
//!   vectors and row-major matrices.
//! - [`InventoryManager`]: product records (attribute rows, names,
//!   quantities, row-aligned) with filtered queries, deduplication,
//!   merging, and proportional splitting.
//!
//! # Quick Start
//!
//! ```
//! use stockpile_inventory::{InventoryAttribute, InventoryManager, Series, SortOrder};
//!
//! let mut inventory = InventoryManager::new();
//! inventory.add_product(
//!     Series::from_slice(&[InventoryAttribute::new("weight", 2.5)]),
//!     "anchor",
//!     40,
//! );
//! inventory.add_product(
//!     Series::from_slice(&[InventoryAttribute::new("weight", 0.1)]),
//!     "washer",
//!     5000,
//! );
//!
//! let light = inventory.query("weight", 0.0..=1.0, 100, SortOrder::Ascending);
//! assert_eq!(light.to_string(), "[washer]");
//! ```

#![warn(missing_docs)]

pub mod inventory;
pub mod table;

pub use inventory::{InventoryAttribute, InventoryManager, SortOrder};
pub use table::{Series, Table};
