//! Inventory store for Larder.
//!
//! Holds the items in insertion order and answers the shelf-capacity and
//! expiry queries. The store owns its items outright; dropping it releases
//! them.

pub mod store;

pub use store::{ExpiredNames, Inventory, OldestExpired};

/// Maximum number of fridge items on one (fridge, shelf) pair.
pub const SHELF_CAPACITY: usize = 2;
