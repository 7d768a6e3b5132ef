//! CLI command implementations.
//!
//! Contains the inventory logic behind each menu entry. The interactive
//! session gathers the answers; these functions act on them.

use crate::cli::output::{OutputFormat, format_expired_names, format_oldest};
use crate::cli::parser::Cli;
use crate::cli::session::Session;
use crate::core::{Category, Clock, FoodItem, Location};
use crate::error::Result;
use crate::input::parse_date;
use crate::inventory::Inventory;
use std::io;
use tracing::{debug, info};

/// A fully answered "Add Item" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    /// Item name.
    pub name: String,
    /// Validated use-by date.
    pub use_by: String,
    /// Chosen category.
    pub category: Option<Category>,
    /// Chosen storage placement.
    pub location: Location,
}

/// Result of [`cmd_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was stored.
    Added,
    /// The requested fridge shelf already holds its capacity; nothing was
    /// stored.
    ShelfFull,
}

/// Runs an interactive session on stdin and stdout.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if reading the terminal or writing to it fails.
pub fn execute(cli: &Cli) -> Result<()> {
    info!(
        today = ?cli.today,
        format = ?cli.format,
        "starting inventory session"
    );
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, cli.clock(), cli.format);
    session.run()
}

/// Stores a new item unless its fridge shelf is already full.
///
/// The shelf is checked before the item is built, so a full shelf never
/// produces an item.
///
/// # Errors
///
/// Returns [`crate::error::InputError`] (wrapped) if the use-by date is not
/// `YYYY-MM-DD`, or [`crate::error::ItemError`] (wrapped) if the request
/// fails item construction.
pub fn cmd_add(
    inventory: &mut Inventory,
    request: AddRequest,
    clock: &dyn Clock,
) -> Result<AddOutcome> {
    let use_by = parse_date(&request.use_by)?;
    if let Location::Fridge {
        fridge_number,
        shelf_number,
    } = request.location
        && inventory.is_shelf_full(fridge_number, shelf_number)
    {
        return Ok(AddOutcome::ShelfFull);
    }

    let item = FoodItem::new_with_clock(
        request.name,
        use_by,
        request.category,
        request.location,
        clock,
    )?;
    inventory.add_item(item);
    Ok(AddOutcome::Added)
}

/// Removes the first item with the given name. Missing names are ignored.
pub fn cmd_remove(inventory: &mut Inventory, name: &str) -> bool {
    let removed = inventory.remove_item(name).is_some();
    debug!(name, removed, "remove command");
    removed
}

/// Renders the oldest expired item.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn cmd_show_oldest(
    inventory: &Inventory,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String> {
    format_oldest(inventory.find_oldest_expired_item(clock.today()), format)
}

/// Renders the names of every expired item.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn cmd_show_expired(
    inventory: &Inventory,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String> {
    format_expired_names(&inventory.list_expired_item_names(clock.today()), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalendarDate, FixedClock};
    use crate::error::{Error, InputError, ItemError};

    fn clock() -> FixedClock {
        FixedClock(CalendarDate::new(2025, 1, 15))
    }

    fn request(name: &str, use_by: &str, location: Location) -> AddRequest {
        AddRequest {
            name: name.to_string(),
            use_by: use_by.to_string(),
            category: Some(Category::Vegetable),
            location,
        }
    }

    #[test]
    fn test_cmd_add_stamps_frozen_on_from_clock() {
        let mut inventory = Inventory::new();
        let outcome = cmd_add(
            &mut inventory,
            request("leek", "2025-01-20", Location::fridge(1, 1)),
            &clock(),
        )
        .unwrap();

        assert_eq!(outcome, AddOutcome::Added);
        let item = inventory.get("leek").unwrap();
        assert_eq!(item.frozen_on(), CalendarDate::new(2025, 1, 15));
    }

    #[test]
    fn test_cmd_add_rejects_third_item_on_shelf() {
        let mut inventory = Inventory::new();
        for name in ["a", "b"] {
            let outcome = cmd_add(
                &mut inventory,
                request(name, "2025-01-20", Location::fridge(3, 1)),
                &clock(),
            )
            .unwrap();
            assert_eq!(outcome, AddOutcome::Added);
        }

        let outcome = cmd_add(
            &mut inventory,
            request("c", "2025-01-20", Location::fridge(3, 1)),
            &clock(),
        )
        .unwrap();
        assert_eq!(outcome, AddOutcome::ShelfFull);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_cmd_add_freezer_has_no_capacity() {
        let mut inventory = Inventory::new();
        for name in ["a", "b", "c"] {
            let outcome = cmd_add(
                &mut inventory,
                request(name, "2025-01-20", Location::freezer("shelf")),
                &clock(),
            )
            .unwrap();
            assert_eq!(outcome, AddOutcome::Added);
        }
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_cmd_add_propagates_item_error() {
        let mut inventory = Inventory::new();
        let err = cmd_add(
            &mut inventory,
            request("", "2025-01-20", Location::fridge(1, 1)),
            &clock(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Item(ItemError::EmptyName)));
    }

    #[test]
    fn test_cmd_add_rejects_malformed_use_by() {
        let mut inventory = Inventory::new();
        let err = cmd_add(
            &mut inventory,
            request("leek", "2025-1-20", Location::fridge(1, 1)),
            &clock(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Input(InputError::InvalidDate { .. })));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_cmd_remove() {
        let mut inventory = Inventory::new();
        cmd_add(
            &mut inventory,
            request("leek", "2025-01-20", Location::fridge(1, 1)),
            &clock(),
        )
        .unwrap();

        assert!(!cmd_remove(&mut inventory, "onion"));
        assert!(cmd_remove(&mut inventory, "leek"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_cmd_show_queries_use_clock() {
        let mut inventory = Inventory::new();
        cmd_add(
            &mut inventory,
            request("leek", "2025-01-14", Location::fridge(1, 1)),
            &clock(),
        )
        .unwrap();

        let text = cmd_show_oldest(&inventory, &clock(), OutputFormat::Text).unwrap();
        assert!(text.contains("Name: leek"));

        let earlier = FixedClock(CalendarDate::new(2025, 1, 14));
        let text = cmd_show_oldest(&inventory, &earlier, OutputFormat::Text).unwrap();
        assert_eq!(text, "No expired items found.\n");

        let text = cmd_show_expired(&inventory, &clock(), OutputFormat::Text).unwrap();
        assert_eq!(text, "Expired Item Names:\nleek\n");
    }
}
