//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Category, ItemDetails};
use crate::error::{CommandError, Error, Result};
use crate::input::MenuChoice;
use crate::inventory::{ExpiredNames, OldestExpired};
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommandError::InvalidArgument(format!(
                "unknown output format: {other} (expected text or json)"
            ))),
        }
    }
}

/// Message shown for queries on an empty inventory.
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

/// Message shown when nothing has expired.
pub const NONE_EXPIRED: &str = "No expired items found.";

/// Formats the main menu, without the choice prompt.
#[must_use]
pub fn format_menu() -> String {
    let mut output = String::from("----- Food Inventory Manager -----\n");
    for choice in MenuChoice::ALL {
        let _ = writeln!(output, "{}. {}", choice.number(), choice.label());
    }
    output
}

/// Formats the category selection list.
#[must_use]
pub fn format_category_menu() -> String {
    let mut output = String::from("Select the item category:\n");
    for category in Category::ALL {
        let _ = writeln!(output, "{}. {}", category.menu_number(), category.label());
    }
    output
}

/// Formats the storage selection list.
#[must_use]
pub fn format_storage_menu() -> String {
    "Select the storage location:\n1. Fridge\n2. Freezer\n".to_string()
}

fn format_details_text(details: &ItemDetails<'_>) -> String {
    let mut output = String::new();
    for (label, value) in details.fields() {
        let _ = writeln!(output, "{label}: {value}");
    }
    output
}

/// Formats the result of an oldest-expired lookup.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_oldest(outcome: OldestExpired<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_oldest_text(outcome)),
        OutputFormat::Json => {
            #[derive(Serialize)]
            #[serde(tag = "status", rename_all = "snake_case")]
            enum OldestOutput<'a> {
                EmptyInventory,
                NoneExpired,
                Found { item: ItemDetails<'a> },
            }
            let report = match outcome {
                OldestExpired::EmptyInventory => OldestOutput::EmptyInventory,
                OldestExpired::NoneExpired => OldestOutput::NoneExpired,
                OldestExpired::Found(item) => OldestOutput::Found {
                    item: item.details(),
                },
            };
            Ok(format_json(&report)?)
        }
    }
}

fn format_oldest_text(outcome: OldestExpired<'_>) -> String {
    match outcome {
        OldestExpired::EmptyInventory => format!("{EMPTY_INVENTORY}\n"),
        OldestExpired::NoneExpired => format!("{NONE_EXPIRED}\n"),
        OldestExpired::Found(item) => {
            let mut output = String::from("Oldest Item Details:\n");
            output.push_str(&format_details_text(&item.details()));
            output.push_str(" \n");
            output
        }
    }
}

/// Formats the result of an expired-names listing.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_expired_names(outcome: &ExpiredNames<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_expired_names_text(outcome)),
        OutputFormat::Json => {
            #[derive(Serialize)]
            #[serde(tag = "status", rename_all = "snake_case")]
            enum ExpiredOutput<'a> {
                EmptyInventory,
                Listed { names: &'a [&'a str] },
            }
            let report = match outcome {
                ExpiredNames::EmptyInventory => ExpiredOutput::EmptyInventory,
                ExpiredNames::Names(names) => ExpiredOutput::Listed { names },
            };
            Ok(format_json(&report)?)
        }
    }
}

fn format_expired_names_text(outcome: &ExpiredNames<'_>) -> String {
    match outcome {
        ExpiredNames::EmptyInventory => format!("{EMPTY_INVENTORY}\n"),
        ExpiredNames::Names(names) => {
            let mut output = String::from("Expired Item Names:\n");
            for name in names {
                let _ = writeln!(output, "{name}");
            }
            if names.is_empty() {
                let _ = writeln!(output, "{NONE_EXPIRED}");
            }
            output
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            let message = error.to_string();
            format_json(&ErrorOutput {
                error: message.clone(),
            })
            .unwrap_or(message)
        }
    }
}

/// Formats a value as pretty-printed JSON with a trailing newline.
fn format_json<T: Serialize>(value: &T) -> std::result::Result<String, CommandError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalendarDate, FoodItem, Location};
    use crate::error::ItemError;
    use std::collections::BTreeMap;

    fn milk() -> FoodItem {
        FoodItem::new_on(
            "milk",
            "2025-01-10",
            Some(Category::Milk),
            Location::fridge(1, 2),
            CalendarDate::new(2025, 1, 3),
        )
        .unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu();
        assert!(menu.starts_with("----- Food Inventory Manager -----\n"));
        assert!(menu.contains("1. Add Item\n"));
        assert!(menu.contains("3. Display Oldest Item\n"));
        assert!(menu.ends_with("5. Exit\n"));
    }

    #[test]
    fn test_format_category_menu() {
        let menu = format_category_menu();
        assert!(menu.contains("1. Vegetable\n"));
        assert!(menu.contains("4. Meat\n"));
    }

    #[test]
    fn test_format_details_text() {
        let text = format_details_text(&milk().details());
        assert_eq!(
            text,
            "Name: milk\nUse By: 2025-01-10\nFrozen On: 2025-1-3\nCategory: milk\nFridge Number: 1\nShelf Number: 2\n"
        );
    }

    #[test]
    fn test_format_oldest_text() {
        let item = milk();
        let text = format_oldest(OldestExpired::Found(&item), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Oldest Item Details:\nName: milk\n"));
        assert!(text.ends_with("Shelf Number: 2\n \n"));

        assert_eq!(
            format_oldest(OldestExpired::EmptyInventory, OutputFormat::Text).unwrap(),
            "Inventory is empty.\n"
        );
        assert_eq!(
            format_oldest(OldestExpired::NoneExpired, OutputFormat::Text).unwrap(),
            "No expired items found.\n"
        );
    }

    #[test]
    fn test_format_oldest_json() {
        let item = milk();
        let json = format_oldest(OldestExpired::Found(&item), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["item"]["name"], "milk");
        assert_eq!(value["item"]["fridge_number"], 1);

        let json = format_oldest(OldestExpired::NoneExpired, OutputFormat::Json).unwrap();
        assert!(json.contains("\"status\": \"none_expired\""));
    }

    #[test]
    fn test_format_expired_names_text() {
        let names = ExpiredNames::Names(vec!["milk", "ham"]);
        assert_eq!(
            format_expired_names(&names, OutputFormat::Text).unwrap(),
            "Expired Item Names:\nmilk\nham\n"
        );

        let none = ExpiredNames::Names(vec![]);
        assert_eq!(
            format_expired_names(&none, OutputFormat::Text).unwrap(),
            "Expired Item Names:\nNo expired items found.\n"
        );

        assert_eq!(
            format_expired_names(&ExpiredNames::EmptyInventory, OutputFormat::Text).unwrap(),
            "Inventory is empty.\n"
        );
    }

    #[test]
    fn test_format_expired_names_json() {
        let names = ExpiredNames::Names(vec!["milk"]);
        let json = format_expired_names(&names, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "listed");
        assert_eq!(value["names"][0], "milk");

        let json = format_expired_names(&ExpiredNames::EmptyInventory, OutputFormat::Json).unwrap();
        assert!(json.contains("empty_inventory"));
    }

    #[test]
    fn test_format_error() {
        let err = Error::from(ItemError::EmptyName);
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "item error: item name cannot be empty"
        );
        assert!(format_error(&err, OutputFormat::Json).contains("\"error\""));
    }

    #[test]
    fn test_format_json_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");
        let err = format_json(&map).unwrap_err();
        assert!(matches!(err, CommandError::OutputFormat(_)));
    }
}
