//! Core domain models for Larder.
//!
//! This module contains the item model and the calendar dates it is
//! compared by. These are pure domain models with no I/O dependencies.

pub mod date;
pub mod item;

pub use date::{CalendarDate, Clock, FixedClock, SystemClock};
pub use item::{Category, FoodItem, ItemDetails, Location, StorageKind};
