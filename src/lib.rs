//! # Larder
//!
//! Interactive food inventory tracker.
//!
//! Larder keeps perishable items on numbered fridge shelves or at free-form
//! freezer positions and answers two questions about them: which expired
//! item is the oldest, and which items are past their use-by date.
//!
//! ## Features
//!
//! - **Item model**: fridge and freezer items as one type with a location enum
//! - **Shelf capacity**: at most two fridge items per shelf, checked before adding
//! - **Expiry queries**: deterministic against an injected "today"
//! - **Interactive menu**: line-based session over any reader and writer

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod input;
pub mod inventory;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{CalendarDate, Category, Clock, FixedClock, FoodItem, Location, SystemClock};

// Re-export inventory types
pub use inventory::{ExpiredNames, Inventory, OldestExpired, SHELF_CAPACITY};

// Re-export CLI types
pub use cli::{Cli, OutputFormat, Session};
